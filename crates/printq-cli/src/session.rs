//! Interactive print session: a line-oriented loop over an in-memory
//! queue.
//!
//! The command set maps one-to-one onto the queue operations: `add`
//! queues files with default settings, `color` / `copies` / `duplex`
//! edit one field of one job, `remove` drops a job, and `submit` runs
//! one sequential upload pass. The queue is re-printed after every
//! mutation. Nothing is persisted; quitting abandons the session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use printq_api_client::{ApiClient, SubmitOutcome};
use printq_core::{AppError, ColorMode, Duplex, PrintJob, PrintQueue};
use uuid::Uuid;

const HELP: &str = "\
Commands:
  add <path>...        queue files with default settings
  list                 show the queue
  color <n> bw|color   set color mode for job n
  copies <n> up|down   change copy count for job n (never below 1)
  duplex <n> yes|no    set duplex for job n
  remove <n>           drop job n from the queue
  submit               upload every queued job, one at a time
  help                 show this help
  quit                 leave the session
";

/// One parsed session command. Positions are 1-based, as shown by
/// `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<PathBuf>),
    List,
    Color(usize, ColorMode),
    CopiesUp(usize),
    CopiesDown(usize),
    Duplex(usize, Duplex),
    Remove(usize),
    Submit,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Command, AppError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(AppError::InvalidInput("empty command".to_string()));
        };

        match verb {
            "add" => {
                let paths: Vec<PathBuf> = parts.map(PathBuf::from).collect();
                if paths.is_empty() {
                    return Err(AppError::InvalidInput(
                        "add requires at least one path".to_string(),
                    ));
                }
                Ok(Command::Add(paths))
            }
            "list" => Ok(Command::List),
            "color" => {
                let index = parse_index(parts.next())?;
                let mode: ColorMode = required(parts.next(), "color requires bw or color")?.parse()?;
                Ok(Command::Color(index, mode))
            }
            "copies" => {
                let index = parse_index(parts.next())?;
                match required(parts.next(), "copies requires up or down")? {
                    "up" => Ok(Command::CopiesUp(index)),
                    "down" => Ok(Command::CopiesDown(index)),
                    other => Err(AppError::InvalidInput(format!(
                        "expected up or down, got: {}",
                        other
                    ))),
                }
            }
            "duplex" => {
                let index = parse_index(parts.next())?;
                let duplex: Duplex = required(parts.next(), "duplex requires yes or no")?.parse()?;
                Ok(Command::Duplex(index, duplex))
            }
            "remove" => Ok(Command::Remove(parse_index(parts.next())?)),
            "submit" => Ok(Command::Submit),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::InvalidInput(format!(
                "unknown command: {} (try 'help')",
                other
            ))),
        }
    }
}

fn required<'a>(part: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    part.ok_or_else(|| AppError::InvalidInput(message.to_string()))
}

fn parse_index(part: Option<&str>) -> Result<usize, AppError> {
    let raw = required(part, "expected a job position")?;
    let index: usize = raw
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("job position must be a number, got: {}", raw)))?;
    if index == 0 {
        return Err(AppError::InvalidInput(
            "job positions start at 1".to_string(),
        ));
    }
    Ok(index)
}

fn job_id(queue: &PrintQueue, index: usize) -> Result<Uuid, AppError> {
    queue
        .jobs()
        .get(index - 1)
        .map(|job| job.id)
        .ok_or_else(|| AppError::NotFound(format!("no job at position {}", index)))
}

fn write_outcomes<W: Write>(output: &mut W, outcomes: &[SubmitOutcome]) -> Result<()> {
    for outcome in outcomes {
        match &outcome.result {
            Ok(ack) => writeln!(
                output,
                "{}: {}",
                outcome.filename,
                ack.message.as_deref().unwrap_or("")
            )?,
            Err(err) => writeln!(output, "{}: upload failed: {:#}", outcome.filename, err)?,
        }
    }
    Ok(())
}

/// Apply one command to the session. Returns `true` when the session
/// should end. Command-level errors (bad position, unknown verb) are
/// printed, never propagated; only output I/O errors bubble up.
pub async fn apply<W: Write>(
    client: &ApiClient,
    queue: &mut PrintQueue,
    command: Command,
    output: &mut W,
) -> Result<bool> {
    match command {
        Command::Add(paths) => {
            queue.append(paths.into_iter().map(PrintJob::new));
            write!(output, "{}", crate::render_queue(queue))?;
        }
        Command::List => {
            write!(output, "{}", crate::render_queue(queue))?;
        }
        Command::Color(index, mode) => match job_id(queue, index) {
            Ok(id) => {
                queue.set_color(id, mode);
                write!(output, "{}", crate::render_queue(queue))?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
        Command::CopiesUp(index) => match job_id(queue, index) {
            Ok(id) => {
                queue.increment_copies(id);
                write!(output, "{}", crate::render_queue(queue))?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
        Command::CopiesDown(index) => match job_id(queue, index) {
            Ok(id) => {
                queue.decrement_copies(id);
                write!(output, "{}", crate::render_queue(queue))?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
        Command::Duplex(index, duplex) => match job_id(queue, index) {
            Ok(id) => {
                queue.set_duplex(id, duplex);
                write!(output, "{}", crate::render_queue(queue))?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
        Command::Remove(index) => match job_id(queue, index) {
            Ok(id) => {
                queue.remove(id);
                write!(output, "{}", crate::render_queue(queue))?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
        Command::Submit => {
            if queue.is_empty() {
                writeln!(output, "Nothing to submit.")?;
            } else {
                // Jobs stay queued after the pass; submitting again
                // re-uploads them.
                let outcomes = client.submit_all(queue.jobs()).await;
                write_outcomes(output, &outcomes)?;
            }
        }
        Command::Help => {
            write!(output, "{}", HELP)?;
        }
        Command::Quit => return Ok(true),
    }

    Ok(false)
}

/// Drive an interactive session until `quit` or end of input.
pub async fn run<R: BufRead, W: Write>(
    client: &ApiClient,
    queue: &mut PrintQueue,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "printq session. Type 'help' for commands.")?;
    write!(output, "{}", crate::render_queue(queue))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                if apply(client, queue, command, output).await? {
                    break;
                }
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_with_paths() {
        let command = Command::parse("add a.pdf b.pdf").unwrap();
        assert_eq!(
            command,
            Command::Add(vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])
        );
    }

    #[test]
    fn parse_add_without_paths_fails() {
        assert!(Command::parse("add").is_err());
    }

    #[test]
    fn parse_color() {
        assert_eq!(
            Command::parse("color 2 color").unwrap(),
            Command::Color(2, ColorMode::Color)
        );
        assert_eq!(
            Command::parse("color 1 bw").unwrap(),
            Command::Color(1, ColorMode::Bw)
        );
        assert!(Command::parse("color 1 sepia").is_err());
        assert!(Command::parse("color bw").is_err());
    }

    #[test]
    fn parse_copies() {
        assert_eq!(Command::parse("copies 3 up").unwrap(), Command::CopiesUp(3));
        assert_eq!(
            Command::parse("copies 1 down").unwrap(),
            Command::CopiesDown(1)
        );
        assert!(Command::parse("copies 1 sideways").is_err());
    }

    #[test]
    fn parse_duplex() {
        assert_eq!(
            Command::parse("duplex 1 no").unwrap(),
            Command::Duplex(1, Duplex::No)
        );
    }

    #[test]
    fn parse_rejects_position_zero() {
        assert!(Command::parse("remove 0").is_err());
        assert!(Command::parse("color 0 bw").is_err());
    }

    #[test]
    fn parse_simple_verbs() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("submit").unwrap(), Command::Submit);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown_verb_fails() {
        let err = Command::parse("print everything").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }
}
