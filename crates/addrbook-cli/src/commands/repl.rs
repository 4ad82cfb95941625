use crate::commands::{open_session, save_session, Action, Context, Session};
use crate::error::describe_core_error;
use addrbook_core::CoreError;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

pub const HELP: &str = "\
Commands:
  hello                              greet the bot
  add <name> <phone>                 add a phone, creating the contact if needed
  change <name> <old> <new>          replace a phone number
  phone <name>                       show phone numbers
  remove-phone <name> <phone>        remove a phone number
  delete <name>                      delete a contact
  all                                list every contact
  add-birthday <name> <DD.MM.YYYY>   set the birthday
  show-birthday <name>               show the birthday
  birthdays [days]                   upcoming congratulation dates
  help                               show this message
  close | exit                       save and quit
";

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Empty,
    Exit,
    Unknown(String),
    Action(Action),
}

pub fn parse_line(line: &str) -> Result<Line, CoreError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Line::Empty);
    };
    let command = command.to_lowercase();
    let args: Vec<&str> = parts.collect();

    let action = match command.as_str() {
        "close" | "exit" => return Ok(Line::Exit),
        "hello" => Action::Hello,
        "help" => Action::Help,
        "all" => Action::All,
        "add" => {
            let [name, phone] = take::<2>(&command, &args)?;
            Action::Add { name, phone }
        }
        "change" => {
            let [name, old_phone, new_phone] = take::<3>(&command, &args)?;
            Action::Change {
                name,
                old_phone,
                new_phone,
            }
        }
        "phone" => {
            let [name] = take::<1>(&command, &args)?;
            Action::Phone { name }
        }
        "remove-phone" => {
            let [name, phone] = take::<2>(&command, &args)?;
            Action::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = take::<1>(&command, &args)?;
            Action::Delete { name }
        }
        "add-birthday" => {
            let [name, birthday] = take::<2>(&command, &args)?;
            Action::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = take::<1>(&command, &args)?;
            Action::ShowBirthday { name }
        }
        "birthdays" => {
            let days = args
                .first()
                .map(|raw| {
                    raw.parse::<i64>()
                        .map_err(|_| CoreError::InvalidNumber(raw.to_string()))
                })
                .transpose()?;
            Action::Birthdays { days }
        }
        _ => return Ok(Line::Unknown(command)),
    };
    Ok(Line::Action(action))
}

// Extra arguments are ignored.
fn take<const N: usize>(command: &str, args: &[&str]) -> Result<[String; N], CoreError> {
    if args.len() < N {
        return Err(CoreError::MissingArguments {
            command: command.to_string(),
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|index| args[index].to_string()))
}

pub fn run(ctx: &Context<'_>) -> Result<()> {
    if ctx.json {
        debug!("--json has no effect in interactive mode");
    }
    let mut session = open_session(ctx)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock())?;
    save_session(ctx, &session)
}

/// Reads commands until `close`/`exit` or end of input. Errors from a single
/// command are printed and the loop continues.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{GREETING}")?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(Line::Empty) => continue,
            Ok(Line::Exit) => {
                writeln!(output, "{FAREWELL}")?;
                break;
            }
            Ok(Line::Unknown(command)) => {
                debug!(%command, "unknown command");
                writeln!(output, "Invalid command.")?;
            }
            Ok(Line::Action(action)) => match session.apply(action) {
                Ok(reply) => writeln!(output, "{reply}")?,
                Err(err) => writeln!(output, "{}", describe_core_error(&err))?,
            },
            Err(err) => writeln!(output, "{}", describe_core_error(&err))?,
        }
    }
    Ok(())
}
