use thiserror::Error;

use tictactoe_engine::tictactoe::{BoardSize, Difficulty, ParseError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Zero-based board index; the prompt shows cells numbered from 1.
    Place(usize),
    Reset,
    Size(BoardSize),
    Difficulty(Difficulty),
    Timer(bool),
    /// `None` lifts the cap.
    SearchDepth(Option<usize>),
    Scores,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input, type 'help' for commands")]
    Empty,

    #[error("cells are numbered from 1")]
    ZeroCell,

    #[error("unknown command '{0}', type 'help' for commands")]
    Unknown(String),

    #[error("'{command}' needs an argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("search depth must be a positive number or 'off'")]
    InvalidDepth,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub const HELP: &str = "\
commands:
  <cell>                    place X on a numbered cell
  reset                     start a new game (scores are kept)
  size 3|4                  change board size (starts a new game)
  difficulty easy|medium|hard
  timer on|off              toggle the per-turn countdown
  depth <n>|off             cap how far the hard computer looks ahead
  scores                    show the scoreboard
  quit";

pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    let arg = words.next();

    if let Ok(cell) = head.parse::<usize>() {
        return cell
            .checked_sub(1)
            .map(ConsoleCommand::Place)
            .ok_or(CommandError::ZeroCell);
    }

    match head.to_ascii_lowercase().as_str() {
        "reset" | "new" => Ok(ConsoleCommand::Reset),
        "scores" => Ok(ConsoleCommand::Scores),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        "size" => {
            let arg = arg.ok_or(CommandError::MissingArgument {
                command: "size",
                expected: "3 or 4",
            })?;
            Ok(ConsoleCommand::Size(arg.parse()?))
        }
        "difficulty" | "level" => {
            let arg = arg.ok_or(CommandError::MissingArgument {
                command: "difficulty",
                expected: "easy, medium or hard",
            })?;
            Ok(ConsoleCommand::Difficulty(arg.parse()?))
        }
        "timer" => match arg.map(str::to_ascii_lowercase).as_deref() {
            Some("on") => Ok(ConsoleCommand::Timer(true)),
            Some("off") => Ok(ConsoleCommand::Timer(false)),
            _ => Err(CommandError::MissingArgument {
                command: "timer",
                expected: "on or off",
            }),
        },
        "depth" => match arg.map(str::to_ascii_lowercase).as_deref() {
            None => Err(CommandError::MissingArgument {
                command: "depth",
                expected: "a positive number or off",
            }),
            Some("off") => Ok(ConsoleCommand::SearchDepth(None)),
            Some(value) => match value.parse::<usize>() {
                Ok(depth) if depth > 0 => Ok(ConsoleCommand::SearchDepth(Some(depth))),
                _ => Err(CommandError::InvalidDepth),
            },
        },
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
