use addrbook_config::AppConfig;
use addrbook_core::domain::{AddressBook, Record};
use addrbook_core::dto::{RecordDto, UpcomingBirthdayDto};
use addrbook_core::CoreError;
use addrbook_store::Store;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

pub mod birthdays;
pub mod contacts;
pub mod repl;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub today: NaiveDate,
}

/// One address book operation, shared by subcommands and the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        days: Option<i64>,
    },
}

impl Action {
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Action::Add { .. }
                | Action::Change { .. }
                | Action::RemovePhone { .. }
                | Action::Delete { .. }
                | Action::AddBirthday { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    #[serde(flatten)]
    pub record: RecordDto,
    #[serde(skip)]
    pub described: String,
}

impl From<&Record> for ContactLine {
    fn from(record: &Record) -> Self {
        Self {
            record: RecordDto::from(record),
            described: record.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Message {
        message: String,
    },
    Contacts(Vec<ContactLine>),
    Phones {
        name: String,
        phones: Vec<String>,
    },
    Birthday {
        name: String,
        birthday: Option<String>,
    },
    Upcoming {
        window_days: i64,
        birthdays: Vec<UpcomingBirthdayDto>,
    },
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message {
            message: text.into(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Message { message } => f.write_str(message),
            Reply::Contacts(records) => {
                if records.is_empty() {
                    return f.write_str("No saved contacts.");
                }
                let lines: Vec<&str> = records
                    .iter()
                    .map(|line| line.described.as_str())
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            Reply::Phones { name, phones } => {
                if phones.is_empty() {
                    write!(f, "No phone numbers for {name}.")
                } else {
                    write!(f, "Phone numbers for {name}: {}", phones.join(", "))
                }
            }
            Reply::Birthday { name, birthday } => match birthday {
                Some(value) => write!(f, "Birthday of {name}: {value}"),
                None => write!(f, "No birthday saved for {name}."),
            },
            Reply::Upcoming {
                window_days,
                birthdays,
            } => {
                if birthdays.is_empty() {
                    return write!(f, "No birthdays in the next {window_days} days.");
                }
                let lines: Vec<String> = birthdays
                    .iter()
                    .map(|item| {
                        format!(
                            "Name: {}, congratulation date: {}",
                            item.name, item.congratulation_date
                        )
                    })
                    .collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

/// The in-memory book for one run, plus whether it needs saving.
pub struct Session<'a> {
    book: AddressBook,
    config: &'a AppConfig,
    today: NaiveDate,
    dirty: bool,
}

impl<'a> Session<'a> {
    pub fn new(book: AddressBook, config: &'a AppConfig, today: NaiveDate) -> Self {
        Self {
            book,
            config,
            today,
            dirty: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn apply(&mut self, action: Action) -> Result<Reply, CoreError> {
        debug!(?action, "apply");
        let mutates = action.mutates();
        let reply = match action {
            Action::Hello => Reply::message("How can I help you?"),
            Action::Help => Reply::message(repl::HELP.trim_end()),
            Action::Add { name, phone } => contacts::add(&mut self.book, &name, &phone)?,
            Action::Change {
                name,
                old_phone,
                new_phone,
            } => contacts::change(&mut self.book, &name, &old_phone, &new_phone)?,
            Action::Phone { name } => contacts::phone(&self.book, &name)?,
            Action::RemovePhone { name, phone } => {
                contacts::remove_phone(&mut self.book, &name, &phone)?
            }
            Action::Delete { name } => contacts::delete(&mut self.book, &name)?,
            Action::All => contacts::all(&self.book),
            Action::AddBirthday { name, birthday } => {
                birthdays::add_birthday(&mut self.book, &name, &birthday)?
            }
            Action::ShowBirthday { name } => birthdays::show_birthday(&self.book, &name)?,
            Action::Birthdays { days } => birthdays::upcoming(
                &self.book,
                self.today,
                days.unwrap_or(self.config.birthday_window_days),
                self.config.leap_day_policy,
            )?,
        };
        if mutates {
            self.dirty = true;
        }
        Ok(reply)
    }
}

pub fn open_session<'a>(ctx: &Context<'a>) -> Result<Session<'a>> {
    let book = ctx.store.book().load().with_context(|| "load address book")?;
    debug!(contacts = book.len(), "address book loaded");
    Ok(Session::new(book, ctx.config, ctx.today))
}

pub fn save_session(ctx: &Context<'_>, session: &Session<'_>) -> Result<()> {
    if !session.is_dirty() {
        return Ok(());
    }
    ctx.store
        .book()
        .save(session.book())
        .with_context(|| "save address book")?;
    debug!(contacts = session.book().len(), "address book saved");
    Ok(())
}

pub fn run_once(ctx: &Context<'_>, action: Action) -> Result<()> {
    let mut session = open_session(ctx)?;
    let reply = session.apply(action)?;
    save_session(ctx, &session)?;

    if ctx.json {
        print_json(&reply)?;
    } else {
        println!("{reply}");
    }
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Action, ContactLine, Reply, Session};
    use addrbook_config::AppConfig;
    use addrbook_core::domain::{AddressBook, Record};
    use addrbook_core::CoreErrorKind;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn add(name: &str, phone: &str) -> Action {
        Action::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn add_reports_created_then_updated() {
        let config = AppConfig::default();
        let mut session = Session::new(AddressBook::new(), &config, today());
        assert_eq!(
            session.apply(add("Ada", "1111111111")).unwrap(),
            Reply::message("Contact added.")
        );
        assert_eq!(
            session.apply(add("Ada", "2222222222")).unwrap(),
            Reply::message("Contact updated.")
        );
        assert!(session.is_dirty());
        assert_eq!(session.book().find("Ada").unwrap().phones().len(), 2);
    }

    #[test]
    fn read_only_actions_keep_session_clean() {
        let config = AppConfig::default();
        let mut session = Session::new(AddressBook::new(), &config, today());
        session.apply(Action::All).unwrap();
        session.apply(Action::Hello).unwrap();
        session.apply(Action::Birthdays { days: None }).unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn failed_mutation_does_not_mark_dirty() {
        let config = AppConfig::default();
        let mut session = Session::new(AddressBook::new(), &config, today());
        let err = session
            .apply(Action::Delete {
                name: "Ghost".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert!(!session.is_dirty());
    }

    #[test]
    fn birthdays_use_configured_window() {
        let config = AppConfig {
            birthday_window_days: 2,
            ..AppConfig::default()
        };
        let mut session = Session::new(AddressBook::new(), &config, today());
        session.apply(add("Ada", "1111111111")).unwrap();
        session
            .apply(Action::AddBirthday {
                name: "Ada".to_string(),
                birthday: "15.06.1990".to_string(),
            })
            .unwrap();

        let reply = session.apply(Action::Birthdays { days: None }).unwrap();
        assert_eq!(reply.to_string(), "No birthdays in the next 2 days.");

        let reply = session.apply(Action::Birthdays { days: Some(7) }).unwrap();
        assert_eq!(
            reply.to_string(),
            "Name: Ada, congratulation date: 2024.06.17"
        );
    }

    #[test]
    fn reply_json_shapes() {
        let reply = Reply::message("Contact added.");
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["message"], "Contact added.");

        let reply = Reply::Phones {
            name: "Ada".to_string(),
            phones: vec!["1111111111".to_string()],
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["phones"][0], "1111111111");
    }

    #[test]
    fn contacts_reply_renders_record_description() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        let reply = Reply::Contacts(vec![ContactLine::from(&record)]);
        assert_eq!(reply.to_string(), record.to_string());
        assert_eq!(
            reply.to_string(),
            "Contact name: Ada, phones: 1111111111; 2222222222"
        );

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value[0]["name"], "Ada");
        assert_eq!(value[0]["phones"][1], "2222222222");
        assert!(value[0].get("described").is_none());
    }
}
