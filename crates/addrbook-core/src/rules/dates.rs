use crate::domain::Birthday;
use crate::error::CoreError;
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
    Skip,
}

impl FromStr for LeapDayPolicy {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "feb28" => Ok(LeapDayPolicy::Feb28),
            "mar1" => Ok(LeapDayPolicy::Mar1),
            "skip" => Ok(LeapDayPolicy::Skip),
            _ => Err(CoreError::InvalidLeapDayPolicy(raw.to_string())),
        }
    }
}

pub fn anniversary_in_year(
    birthday: &Birthday,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    if birthday.is_leap_day() && !is_leap_year(year) {
        return match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::Skip => None,
        };
    }

    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
