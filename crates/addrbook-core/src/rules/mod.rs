pub mod birthdays;
pub mod dates;

pub use birthdays::{
    congratulation_date, upcoming_birthdays, upcoming_birthdays_with_policy,
    validate_window_days, UpcomingBirthday, CONGRATULATION_FORMAT, DEFAULT_WINDOW_DAYS,
    MAX_WINDOW_DAYS,
};
pub use dates::{anniversary_in_year, is_leap_year, LeapDayPolicy};
