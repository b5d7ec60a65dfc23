//! Editor integration for the navigation history.
//!
//! The history core knows nothing about windows, open documents or the
//! filesystem. This module defines the [`Host`] trait through which those
//! are reached, the [`Navigator`] that wires selection events and back/forward
//! actions to the per-window histories, and [`Workspace`], an in-process host
//! used by the command-line driver and the tests.
//!
//! # Modules
//!
//! - `navigator`: Event handling and stale-entry skipping
//! - `position`: The `path:line:col` addressing convention
//! - `rename`: Renaming the file behind an open document
//! - `workspace`: In-process `Host` implementation

pub mod navigator;
pub mod position;
pub mod rename;
pub mod workspace;

pub use navigator::{Direction, Navigator};
pub use position::EncodedPosition;
pub use workspace::Workspace;

use crate::history::registry::WindowId;
use anyhow::Result;

/// Services the navigation layer needs from the editor.
pub trait Host {
    /// The window currently receiving user actions, if any.
    fn active_window(&self) -> Option<WindowId>;

    /// Returns true if a document with exactly this path is open in
    /// `window`.
    fn is_open(&self, window: WindowId, path: &str) -> bool;

    /// Returns true if `path` names an existing regular file.
    fn file_exists(&self, path: &str) -> bool;

    /// Opens the file at `position` in `window` and moves the caret there.
    fn open_file(&mut self, window: WindowId, position: &EncodedPosition) -> Result<()>;

    /// Points an open document at a new path after its file was renamed.
    ///
    /// Returns false if no document with `old_path` is open in `window`.
    fn retarget(&mut self, window: WindowId, old_path: &str, new_path: &str) -> bool;
}

/// A selection change reported by the editor.
///
/// `row` and `col` are the 0-based position of the primary caret. `path` is
/// `None` for buffers that have never been saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub window: WindowId,
    pub path: Option<String>,
    pub row: usize,
    pub col: usize,
}
