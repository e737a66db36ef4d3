use core::str::FromStr;

use sweep16_core::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command {0:?}, try `h` for help")]
    Unknown(String),
    #[error("Expected {0} arguments")]
    Arity(usize),
    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord, Coord),
    Flag(Coord, Coord),
    Density(CellCount),
    Reset,
    Show,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
r ROW COL   reveal a cell
f ROW COL   toggle a flag
d COUNT     set the mine count (before the first reveal)
n           new round
s           show the board
h           this help
q           quit";

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}

fn coords(args: &[&str]) -> Result<(Coord, Coord), CommandError> {
    match args {
        [row, col] => Ok((number(row)?, number(col)?)),
        _ => Err(CommandError::Arity(2)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match name {
            "r" | "reveal" => coords(args).map(|(row, col)| Command::Reveal(row, col)),
            "f" | "flag" => coords(args).map(|(row, col)| Command::Flag(row, col)),
            "d" | "density" => match args {
                [count] => Ok(Command::Density(number(count)?)),
                _ => Err(CommandError::Arity(1)),
            },
            "n" | "new" => Ok(Command::Reset),
            "s" | "show" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal(3, 4)));
        assert_eq!("  flag 0 15 ".parse::<Command>(), Ok(Command::Flag(0, 15)));
        assert_eq!("d 40".parse::<Command>(), Ok(Command::Density(40)));
        assert_eq!("n".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("r 3".parse::<Command>(), Err(CommandError::Arity(2)));
        assert_eq!(
            "r x 4".parse::<Command>(),
            Err(CommandError::NotANumber("x".to_string()))
        );
        assert_eq!(
            "boom".parse::<Command>(),
            Err(CommandError::Unknown("boom".to_string()))
        );
        assert_eq!(
            "d -1".parse::<Command>(),
            Err(CommandError::NotANumber("-1".to_string()))
        );
    }
}
