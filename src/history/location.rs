//! Positions recorded in the navigation history.
//!
//! A `Location` identifies a place in a document by its path, a 1-based line
//! and a 1-based column. Two locations are the same place when they share a
//! path and a line; the column is carried along so the caret can be restored
//! exactly, but it never takes part in comparisons.
//!
//! # Example
//!
//! ```
//! use navhistory::history::location::Location;
//!
//! let a = Location::new("src/main.rs", 10, 4);
//! let b = Location::new("src/main.rs", 10, 20);
//! let c = Location::new("src/main.rs", 12, 1);
//!
//! assert_eq!(a, b);
//! assert!(a.near(&c));
//! assert!(!a.near(&Location::new("src/main.rs", 13, 1)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Movements within this many lines of the last recorded position are
/// treated as the same logical place.
pub const LINE_THRESHOLD: usize = 2;

/// A position in a document: path, line and column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Document identity, compared by exact string equality
    pub path: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub col: usize,
}

impl Location {
    /// Creates a location from 1-based line and column numbers.
    pub fn new(path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            path: path.into(),
            line,
            col,
        }
    }

    /// Builds a location from a host caret, which reports 0-based row and
    /// column indices.
    ///
    /// Returns `None` when the document has no path (an unsaved buffer),
    /// since such positions cannot be navigated back to.
    ///
    /// # Examples
    ///
    /// ```
    /// use navhistory::history::location::Location;
    ///
    /// let loc = Location::from_caret(Some("a.txt"), 0, 0).unwrap();
    /// assert_eq!((loc.line, loc.col), (1, 1));
    ///
    /// assert!(Location::from_caret(None, 3, 3).is_none());
    /// ```
    pub fn from_caret(path: Option<&str>, row: usize, col: usize) -> Option<Self> {
        path.map(|path| Self::new(path, row + 1, col + 1))
    }

    /// Returns true if `other` is in the same document and within
    /// [`LINE_THRESHOLD`] lines of this location.
    pub fn near(&self, other: &Location) -> bool {
        self.near_within(other, LINE_THRESHOLD)
    }

    /// Same as [`Location::near`] with an explicit line threshold.
    pub fn near_within(&self, other: &Location, threshold: usize) -> bool {
        self.path == other.path && self.line.abs_diff(other.line) <= threshold
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.line == other.line
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.line.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_ignored_by_hash() {
        let mut seen = HashSet::new();
        seen.insert(Location::new("a.txt", 3, 1));
        assert!(seen.contains(&Location::new("a.txt", 3, 80)));
        assert!(!seen.contains(&Location::new("a.txt", 4, 1)));
    }

    #[test]
    fn test_near_is_symmetric() {
        let low = Location::new("a.txt", 1, 1);
        let high = Location::new("a.txt", 3, 1);
        assert!(low.near(&high));
        assert!(high.near(&low));
    }

    #[test]
    fn test_near_within_zero_requires_same_line() {
        let a = Location::new("a.txt", 5, 1);
        assert!(a.near_within(&Location::new("a.txt", 5, 9), 0));
        assert!(!a.near_within(&Location::new("a.txt", 6, 1), 0));
    }
}
