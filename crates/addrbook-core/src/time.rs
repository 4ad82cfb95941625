use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use thiserror::Error;

pub const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

pub fn local_today() -> Result<NaiveDate, TimeParseError> {
    date_at(now_utc(), local_offset())
}

pub fn date_at(now_utc: i64, local_offset: FixedOffset) -> Result<NaiveDate, TimeParseError> {
    let now = DateTime::<Utc>::from_timestamp(now_utc, 0)
        .ok_or(TimeParseError::InvalidTimestamp(now_utc))?;
    Ok(now.with_timezone(&local_offset).date_naive())
}

pub fn parse_reference_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, REFERENCE_DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidDateFormat)
}
