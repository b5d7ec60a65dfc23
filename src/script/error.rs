//! Error types for script parsing.

use thiserror::Error;

/// Errors that can occur while parsing a navigation script.
///
/// Every variant carries the 1-based line of the script it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The first word of the line is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    /// A required argument is missing.
    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: String,
    },
    /// A numeric argument could not be parsed.
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// Extra arguments follow a complete command.
    #[error("line {line}: unexpected argument '{found}'")]
    UnexpectedArgument { line: usize, found: String },
    /// An `open` target is not a valid `path:line:col`.
    #[error("line {line}: {message}")]
    InvalidPosition { line: usize, message: String },
}
