mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{birthdays, contacts, repl, Action, Context};
use crate::error::{exit_code_for, report_error};
use addrbook_config as config;
use addrbook_core::time::{local_today, parse_reference_date};
use addrbook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "Address book with birthday reminders")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Reference date (YYYY-MM-DD) used instead of the local clock
    #[arg(long, global = true, hide = true, value_name = "DATE")]
    today: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive assistant (default)
    Repl,
    /// Add a phone number, creating the contact if needed
    Add(contacts::AddArgs),
    /// Replace one phone number of a contact
    Change(contacts::ChangeArgs),
    /// Show the phone numbers of a contact
    Phone(contacts::NameArgs),
    /// Remove one phone number from a contact
    #[command(name = "remove-phone")]
    RemovePhone(contacts::RemovePhoneArgs),
    /// Delete a contact and all of its data
    Delete(contacts::NameArgs),
    /// List every contact
    All,
    /// Set or replace the birthday of a contact
    #[command(name = "add-birthday")]
    AddBirthday(birthdays::AddBirthdayArgs),
    /// Show the saved birthday of a contact
    #[command(name = "show-birthday")]
    ShowBirthday(contacts::NameArgs),
    /// List birthdays coming up in the next days
    Birthdays(birthdays::BirthdaysArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        today,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = match today {
        Some(raw) => parse_reference_date(&raw).with_context(|| "parse --today")?,
        None => local_today().with_context(|| "read local date")?,
    };
    debug!(%today, "reference date");

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store =
        Store::open(&db_path).with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
        today,
    };

    let action = match command.unwrap_or(Command::Repl) {
        Command::Repl => return repl::run(&ctx),
        Command::Add(args) => Action::Add {
            name: args.name,
            phone: args.phone,
        },
        Command::Change(args) => Action::Change {
            name: args.name,
            old_phone: args.old_phone,
            new_phone: args.new_phone,
        },
        Command::Phone(args) => Action::Phone { name: args.name },
        Command::RemovePhone(args) => Action::RemovePhone {
            name: args.name,
            phone: args.phone,
        },
        Command::Delete(args) => Action::Delete { name: args.name },
        Command::All => Action::All,
        Command::AddBirthday(args) => Action::AddBirthday {
            name: args.name,
            birthday: args.birthday,
        },
        Command::ShowBirthday(args) => Action::ShowBirthday { name: args.name },
        Command::Birthdays(args) => Action::Birthdays { days: args.days },
    };
    commands::run_once(&ctx, action)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
