use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid integer `{token}` on line {line}")]
pub struct BadInteger {
    pub token: String,
    pub line: usize,
}

/// Reads a text file into one string per line.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

/// Parses one integer per line. One bad line fails the whole batch.
pub fn parse_integers(lines: &[String]) -> Result<Vec<i64>, BadInteger> {
    lines
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.trim().parse::<i64>().map_err(|_| BadInteger {
                token: raw.trim().to_string(),
                line: index + 1,
            })
        })
        .collect()
}
