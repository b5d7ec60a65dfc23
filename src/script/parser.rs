//! Parser for navigation scripts.
//!
//! A script is a list of commands, one per line. `#` starts a comment and
//! blank lines are ignored.
//!
//! ```text
//! window 1            # focus (or create) window 1
//! open src/lib.rs:40  # open a file, optionally at line[:col]
//! move 120 5          # move the caret (1-based line and column)
//! back
//! forward
//! dump
//! ```

use super::error::ScriptError;
use crate::history::registry::WindowId;
use crate::host::position::EncodedPosition;

/// A single script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Focus a window, creating it if needed
    Window(WindowId),
    /// Open a file in the active window at a position
    Open(EncodedPosition),
    /// Open an unnamed buffer
    Scratch,
    /// Move the caret of the active document (1-based)
    Move { line: usize, col: usize },
    /// Close an open document
    Close(String),
    /// Delete a file from disk
    Delete(String),
    /// Navigate back
    Back,
    /// Navigate forward
    Forward,
    /// Rename the active document's file
    Rename(String),
    /// Print every window's history
    Dump,
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered.
///
/// # Examples
///
/// ```
/// use navhistory::script::parser::{parse_script, Command};
///
/// let commands = parse_script("window 1\n# comment\nback\n").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[1], Command::Back);
/// ```
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(command) = parse_line(raw, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses one line. Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let content = match raw.split_once('#') {
        Some((before, _)) => before,
        None => raw,
    };
    let mut words = content.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let mut args = Args {
        words,
        line,
        command: name,
    };
    let command = match name {
        "window" => Command::Window(WindowId(args.number("a window id")? as u64)),
        "open" => {
            let target = args.word("a path[:line[:col]]")?;
            let position = target
                .parse::<EncodedPosition>()
                .map_err(|err| ScriptError::InvalidPosition {
                    line,
                    message: err.to_string(),
                })?;
            Command::Open(position)
        }
        "scratch" => Command::Scratch,
        "move" => {
            let line_no = args.number("a line and a column")?;
            let col = args.number("a line and a column")?;
            Command::Move { line: line_no, col }
        }
        "close" => Command::Close(args.word("a path")?.to_string()),
        "delete" => Command::Delete(args.word("a path")?.to_string()),
        "back" => Command::Back,
        "forward" => Command::Forward,
        "rename" => Command::Rename(args.word("a new file name")?.to_string()),
        "dump" => Command::Dump,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    args.finish()?;
    Ok(Some(command))
}

struct Args<'a, I> {
    words: I,
    line: usize,
    command: &'a str,
}

impl<'a, I: Iterator<Item = &'a str>> Args<'a, I> {
    fn word(&mut self, expected: &str) -> Result<&'a str, ScriptError> {
        self.words.next().ok_or_else(|| ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            expected: expected.to_string(),
        })
    }

    fn number(&mut self, expected: &str) -> Result<usize, ScriptError> {
        let word = self.word(expected)?;
        word.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            value: word.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.words.next() {
            Some(found) => Err(ScriptError::UnexpectedArgument {
                line: self.line,
                found: found.to_string(),
            }),
            None => Ok(()),
        }
    }
}
