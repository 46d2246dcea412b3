use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::memory::Cell;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid token `{token}` at position {position}")]
    BadToken { token: String, position: usize },
}

/// A program image: the cell sequence the machine is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub data: Vec<Cell>,
}

impl Program {
    pub fn new(data: Vec<Cell>) -> Self {
        Self { data }
    }

    /// Parses a single line of comma-separated integers. One bad token
    /// fails the whole load.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut data = Vec::new();
        for (position, token) in source.trim_end().split(',').enumerate() {
            let value = token
                .trim()
                .parse::<Cell>()
                .map_err(|_| LoadError::BadToken {
                    token: token.trim().to_string(),
                    position,
                })?;
            data.push(value);
        }
        Ok(Self::new(data))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::parse(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_program_line() {
        let program = Program::parse("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
        assert_eq!(program.data, vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
    }

    #[test]
    fn tolerates_a_trailing_newline() {
        let program = Program::parse("1,0,0,0,99\n").unwrap();
        assert_eq!(program.data, vec![1, 0, 0, 0, 99]);
    }

    #[test]
    fn parses_negative_cells() {
        let program = Program::parse("1,-4,2,0").unwrap();
        assert_eq!(program.data, vec![1, -4, 2, 0]);
    }

    #[test]
    fn fails_the_whole_load_on_a_bad_token() {
        match Program::parse("1,0,zero,0,99") {
            Err(LoadError::BadToken { token, position }) => {
                assert_eq!(token, "zero");
                assert_eq!(position, 2);
            }
            other => panic!("expected BadToken, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(Program::parse("").is_err());
        assert!(Program::parse("\n").is_err());
    }
}
