//! Scripted replay of editor events.
//!
//! Scripts drive an in-process [`crate::host::Workspace`] through a sequence
//! of window, caret and navigation commands. They back the command-line tool
//! and make multi-step navigation scenarios easy to express in tests.

pub mod error;
pub mod loader;
pub mod parser;
pub mod runner;

pub use error::ScriptError;
pub use parser::{parse_script, Command};
pub use runner::ScriptRunner;
