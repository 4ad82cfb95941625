use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number {0:?}: must contain exactly 10 digits")]
    InvalidPhone(String),
    #[error("invalid birthday {0:?}: use DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid leap day policy {0:?}: expected feb28|mar1|skip")]
    InvalidLeapDayPolicy(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("invalid birthday window: {0} days")]
    InvalidWindowDays(i64),
    #[error("contact {0} not found")]
    ContactNotFound(String),
    #[error("phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },
    #[error("{command} expects {expected} argument(s), got {actual}")]
    MissingArguments {
        command: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
    ArgumentCount,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday(_)
            | CoreError::EmptyName
            | CoreError::InvalidLeapDayPolicy(_)
            | CoreError::InvalidNumber(_)
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            CoreError::ContactNotFound(_) | CoreError::PhoneNotFound { .. } => {
                CoreErrorKind::NotFound
            }
            CoreError::MissingArguments { .. } => CoreErrorKind::ArgumentCount,
        }
    }
}
