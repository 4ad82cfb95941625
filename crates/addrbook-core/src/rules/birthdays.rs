use crate::domain::{AddressBook, Birthday};
use crate::error::CoreError;
use crate::rules::dates::{anniversary_in_year, LeapDayPolicy};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday_on: NaiveDate,
    pub congratulate_on: NaiveDate,
}

impl UpcomingBirthday {
    pub fn congratulation_label(&self) -> String {
        self.congratulate_on.format(CONGRATULATION_FORMAT).to_string()
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_with_policy(book, today, window_days, LeapDayPolicy::default())
}

// A negative window matches nothing; there is no upper bound here.
pub fn upcoming_birthdays_with_policy(
    book: &AddressBook,
    today: NaiveDate,
    window_days: i64,
    policy: LeapDayPolicy,
) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for record in book {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(next) = next_occurrence(birthday, today, policy) else {
            continue;
        };

        let delta = (next - today).num_days();
        if (0..=window_days).contains(&delta) {
            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                birthday_on: next,
                congratulate_on: congratulation_date(next),
            });
        }
    }

    upcoming
}

pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

fn next_occurrence(
    birthday: &Birthday,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    match anniversary_in_year(birthday, today.year(), policy) {
        Some(date) if date >= today => Some(date),
        _ => anniversary_in_year(birthday, today.year() + 1, policy),
    }
}
