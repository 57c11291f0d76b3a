//! Parse the line-based commands typed at the prompt.

use std::str::FromStr;
use floodit_core::{BoardHit, BoardLayout, Coord, GameEvent};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type `help` for the list")]
    Unknown(String),
    #[error("Expected {expected} numbers, got {got}")]
    Arity { expected: usize, got: usize },
    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Click the cell at `(row, column)`.
    Cell(i64, i64),
    /// Click at window pixel `(x, y)`.
    Pixel(i32, i32),
    Restart,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
commands:
  <row> <col>   pick the color of that cell
  px <x> <y>    click at window pixel coordinates
  r             restart with a new board
  q             quit
  help          show this list";

    /// Turns the command into a game event, `None` for commands the driver handles itself.
    pub fn to_event(self, side: Coord, layout: &BoardLayout) -> Option<GameEvent> {
        match self {
            Self::Cell(row, col) => {
                let hit = match (Coord::try_from(row), Coord::try_from(col)) {
                    (Ok(row), Ok(col)) if row < side && col < side => BoardHit::Cell((row, col)),
                    _ => BoardHit::Outside,
                };
                Some(GameEvent::Click(hit))
            }
            Self::Pixel(x, y) => Some(GameEvent::Click(layout.locate(side, (x, y)))),
            Self::Restart => Some(GameEvent::Key('r')),
            Self::Help | Self::Quit => None,
        }
    }
}

fn numbers<T: FromStr>(args: &[&str], expected: usize) -> Result<Vec<T>, CommandError> {
    if args.len() != expected {
        return Err(CommandError::Arity {
            expected,
            got: args.len(),
        });
    }
    args.iter()
        .map(|arg| {
            arg.parse()
                .map_err(|_| CommandError::NotANumber((*arg).to_owned()))
        })
        .collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match head {
            "r" | "restart" if rest.is_empty() => Ok(Self::Restart),
            "q" | "quit" | "exit" if rest.is_empty() => Ok(Self::Quit),
            "?" | "h" | "help" => Ok(Self::Help),
            "px" => {
                let xy: Vec<i32> = numbers(rest, 2)?;
                Ok(Self::Pixel(xy[0], xy[1]))
            }
            _ if head.parse::<i64>().is_ok() => {
                let rc: Vec<i64> = numbers(&words, 2)?;
                Ok(Self::Cell(rc[0], rc[1]))
            }
            _ => Err(CommandError::Unknown(line.trim().to_owned())),
        }
    }
}
