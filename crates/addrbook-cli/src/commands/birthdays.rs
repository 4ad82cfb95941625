use crate::commands::Reply;
use addrbook_core::domain::AddressBook;
use addrbook_core::dto::UpcomingBirthdayDto;
use addrbook_core::rules::{upcoming_birthdays_with_policy, validate_window_days, LeapDayPolicy};
use addrbook_core::CoreError;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddBirthdayArgs {
    pub name: String,
    /// Date as DD.MM.YYYY
    pub birthday: String,
}

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Days to look ahead (defaults to birthday_window_days from config)
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,
}

pub fn add_birthday(book: &mut AddressBook, name: &str, raw: &str) -> Result<Reply, CoreError> {
    book.find_mut(name)?.add_birthday(raw)?;
    Ok(Reply::message("Birthday added."))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> Result<Reply, CoreError> {
    let record = book.find(name)?;
    Ok(Reply::Birthday {
        name: record.name().to_string(),
        birthday: record.birthday().map(ToString::to_string),
    })
}

pub fn upcoming(
    book: &AddressBook,
    today: NaiveDate,
    window_days: i64,
    policy: LeapDayPolicy,
) -> Result<Reply, CoreError> {
    let window_days = validate_window_days(window_days)?;
    let items = upcoming_birthdays_with_policy(book, today, window_days, policy);
    Ok(Reply::Upcoming {
        window_days,
        birthdays: items.iter().map(UpcomingBirthdayDto::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::{add_birthday, show_birthday, upcoming};
    use crate::commands::contacts;
    use addrbook_core::domain::AddressBook;
    use addrbook_core::rules::LeapDayPolicy;
    use addrbook_core::CoreErrorKind;
    use chrono::NaiveDate;

    #[test]
    fn add_birthday_requires_contact() {
        let mut book = AddressBook::new();
        let err = add_birthday(&mut book, "Ada", "10.12.1815").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn show_birthday_renders_saved_value() {
        let mut book = AddressBook::new();
        contacts::add(&mut book, "Ada", "1111111111").unwrap();
        assert_eq!(
            show_birthday(&book, "Ada").unwrap().to_string(),
            "No birthday saved for Ada."
        );
        add_birthday(&mut book, "Ada", "10.12.1815").unwrap();
        assert_eq!(
            show_birthday(&book, "Ada").unwrap().to_string(),
            "Birthday of Ada: 10.12.1815"
        );
    }

    #[test]
    fn upcoming_lists_congratulation_dates() {
        let mut book = AddressBook::new();
        contacts::add(&mut book, "Ada", "1111111111").unwrap();
        contacts::add(&mut book, "Bob", "2222222222").unwrap();
        add_birthday(&mut book, "Ada", "16.06.1990").unwrap();
        add_birthday(&mut book, "Bob", "12.06.1985").unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let reply = upcoming(&book, today, 7, LeapDayPolicy::Feb28).unwrap();
        assert_eq!(
            reply.to_string(),
            "Name: Ada, congratulation date: 2024.06.17\nName: Bob, congratulation date: 2024.06.12"
        );
    }

    #[test]
    fn upcoming_rejects_window_outside_command_range() {
        let book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        for days in [-1, 366] {
            let err = upcoming(&book, today, days, LeapDayPolicy::Feb28).unwrap_err();
            assert_eq!(err.kind(), CoreErrorKind::Validation);
        }
    }
}
