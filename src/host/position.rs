//! The `path:line:col` addressing convention used to open a file at a
//! position.

use crate::history::location::Location;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing an encoded position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("empty path in encoded position '{0}'")]
    EmptyPath(String),
    #[error("line and column must be 1 or greater in '{0}'")]
    ZeroCoordinate(String),
}

/// A file path with a 1-based line and column, written `path:line:col`.
///
/// Parsing reads numbers from the right, so a path that itself contains
/// colons is kept intact. Missing line or column default to 1.
///
/// # Examples
///
/// ```
/// use navhistory::host::position::EncodedPosition;
///
/// let pos: EncodedPosition = "notes/todo.md:12:3".parse().unwrap();
/// assert_eq!(pos.path, "notes/todo.md");
/// assert_eq!((pos.line, pos.col), (12, 3));
/// assert_eq!(pos.to_string(), "notes/todo.md:12:3");
///
/// let bare: EncodedPosition = "README".parse().unwrap();
/// assert_eq!((bare.line, bare.col), (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPosition {
    pub path: String,
    pub line: usize,
    pub col: usize,
}

impl EncodedPosition {
    pub fn new(path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            path: path.into(),
            line,
            col,
        }
    }
}

impl From<&Location> for EncodedPosition {
    fn from(location: &Location) -> Self {
        Self::new(location.path.clone(), location.line, location.col)
    }
}

impl From<EncodedPosition> for Location {
    fn from(position: EncodedPosition) -> Self {
        Location::new(position.path, position.line, position.col)
    }
}

impl fmt::Display for EncodedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.col)
    }
}

impl FromStr for EncodedPosition {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Peel up to two trailing numeric fields: path[:line[:col]]
        let mut rest = s;
        let mut numbers = Vec::with_capacity(2);
        while numbers.len() < 2 {
            match rest.rsplit_once(':') {
                Some((head, tail)) => match tail.parse::<usize>() {
                    Ok(n) => {
                        numbers.push(n);
                        rest = head;
                    }
                    Err(_) => break,
                },
                None => break,
            }
        }
        numbers.reverse();

        if rest.is_empty() {
            return Err(PositionError::EmptyPath(s.to_string()));
        }
        let (line, col) = match numbers.as_slice() {
            [] => (1, 1),
            [line] => (*line, 1),
            [line, col, ..] => (*line, *col),
        };
        if line == 0 || col == 0 {
            return Err(PositionError::ZeroCoordinate(s.to_string()));
        }

        Ok(Self::new(rest, line, col))
    }
}
