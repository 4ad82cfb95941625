use addrbook_config::ConfigError;
use addrbook_core::time::TimeParseError;
use addrbook_core::{CoreError, CoreErrorKind};
use addrbook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(core_exit_code(core_err));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_parse_err) = cause.downcast_ref::<TimeParseError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

/// One line of user-facing text for an error raised by a book operation.
pub fn describe_core_error(err: &CoreError) -> String {
    match err.kind() {
        CoreErrorKind::Validation => format!("ERROR: invalid input: {err}"),
        CoreErrorKind::NotFound => format!("ERROR: not found: {err}"),
        CoreErrorKind::ArgumentCount => format!("ERROR: not enough arguments: {err}"),
    }
}

fn core_exit_code(err: &CoreError) -> u8 {
    match err.kind() {
        CoreErrorKind::NotFound => EXIT_NOT_FOUND,
        CoreErrorKind::Validation | CoreErrorKind::ArgumentCount => EXIT_INVALID_INPUT,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Core => match err {
            StoreError::Core(core_err) => core_exit_code(core_err),
            _ => EXIT_INVALID_INPUT,
        },
        StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Corrupt
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::InvalidLeapDayPolicy(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
