use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if !has_fixed_shape(raw) {
            return Err(CoreError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| CoreError::InvalidBirthday(raw.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

// chrono accepts single-digit fields, the stored pattern does not.
fn has_fixed_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 2 || idx == 5 || b.is_ascii_digit())
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
