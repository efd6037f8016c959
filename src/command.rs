//! Text commands typed at the play prompt.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_history::Position;

/// Summary printed by `help`.
pub const HELP: &str = "\
Commands:
  1-9            place a mark on the numbered square
  <label>        place a mark by name, e.g. `center` or `top left`
  jump N, j N    go back to step N (0 is the start)
  restart        same as `jump 0`
  moves          show the board and move list again
  help           show this message
  quit, q        leave the game";

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark.
    Place(Position),
    /// Jump to a history step.
    Jump(usize),
    /// Redraw the current view.
    Show,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command {:?}: {}", input, reason)]
pub struct CommandError {
    /// The offending input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl CommandError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(CommandError::new(s, "empty input"));
        }

        let lower = line.to_lowercase();
        let mut words = lower.split_whitespace();
        let head = words.next().unwrap_or_default();

        match head {
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            "help" | "?" => return Ok(Command::Help),
            "moves" | "show" => return Ok(Command::Show),
            "restart" => return Ok(Command::Jump(0)),
            "j" | "jump" => {
                let step = words
                    .next()
                    .ok_or_else(|| CommandError::new(line, "jump needs a step number"))?;
                if words.next().is_some() {
                    return Err(CommandError::new(line, "jump takes one step number"));
                }
                return step
                    .parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::new(line, "step must be a number"));
            }
            _ => {}
        }

        if let Ok(number) = line.parse::<usize>() {
            // Squares are shown 1-9 on the board.
            return number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Command::Place)
                .ok_or_else(|| CommandError::new(line, "squares are numbered 1-9"));
        }

        Position::from_label(line)
            .map(Command::Place)
            .ok_or_else(|| CommandError::new(line, "not a square or command"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!("1".parse(), Ok(Command::Place(Position::TopLeft)));
        assert_eq!(" 9 ".parse(), Ok(Command::Place(Position::BottomRight)));
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!("center".parse(), Ok(Command::Place(Position::Center)));
        assert_eq!("Top Left".parse(), Ok(Command::Place(Position::TopLeft)));
    }

    #[test]
    fn test_jump_forms() {
        assert_eq!("jump 3".parse(), Ok(Command::Jump(3)));
        assert_eq!("J 0".parse(), Ok(Command::Jump(0)));
        assert_eq!("restart".parse(), Ok(Command::Jump(0)));

        let err = "jump".parse::<Command>().unwrap_err();
        assert_eq!(err.reason, "jump needs a step number");
        assert!("jump x".parse::<Command>().is_err());
        assert!("jump 1 2".parse::<Command>().is_err());
    }

    #[test]
    fn test_control_words() {
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("HELP".parse(), Ok(Command::Help));
        assert_eq!("moves".parse(), Ok(Command::Show));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.input, "dance");
        assert!("".parse::<Command>().is_err());
    }
}
