//! In-process editor model implementing [`Host`].
//!
//! A `Workspace` holds windows, each with a list of open documents and a
//! caret per document. File existence is checked against the real
//! filesystem. Whenever a caret moves, whether from user input or from
//! [`Host::open_file`], a [`SelectionEvent`] is queued the way an editor
//! would report it; callers drain the queue with [`Workspace::take_events`]
//! and feed the events to a [`super::Navigator`].

use super::{EncodedPosition, Host, SelectionEvent};
use crate::history::registry::WindowId;
use anyhow::{bail, Result};
use indexmap::IndexMap;
use std::mem;
use std::path::Path;

/// An open document and its caret (0-based row and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: Option<String>,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default)]
struct Window {
    documents: Vec<Document>,
    active: Option<usize>,
}

impl Window {
    fn position_of(&self, path: &str) -> Option<usize> {
        self.documents
            .iter()
            .position(|doc| doc.path.as_deref() == Some(path))
    }
}

/// Windows and open documents of a running editor session.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    windows: IndexMap<WindowId, Window>,
    active_window: Option<WindowId>,
    events: Vec<SelectionEvent>,
    opened: Vec<EncodedPosition>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `window` active, creating it if it does not exist.
    pub fn focus_window(&mut self, window: WindowId) {
        self.windows.entry(window).or_default();
        self.active_window = Some(window);
    }

    /// Opens a named document in the active window, or switches to it if
    /// already open, and places the caret at the given 0-based position.
    pub fn open_document(&mut self, path: &str, row: usize, col: usize) -> Result<()> {
        let (window_id, window) = self.active_window_mut()?;
        let index = match window.position_of(path) {
            Some(index) => index,
            None => {
                window.documents.push(Document {
                    path: Some(path.to_string()),
                    row: 0,
                    col: 0,
                });
                window.documents.len() - 1
            }
        };
        window.active = Some(index);
        let doc = &mut window.documents[index];
        doc.row = row;
        doc.col = col;
        let event = selection_event(window_id, doc);
        self.events.push(event);
        Ok(())
    }

    /// Opens a new buffer with no path in the active window.
    pub fn open_scratch(&mut self) -> Result<()> {
        let (window_id, window) = self.active_window_mut()?;
        window.documents.push(Document {
            path: None,
            row: 0,
            col: 0,
        });
        window.active = Some(window.documents.len() - 1);
        let event = selection_event(window_id, &window.documents[window.documents.len() - 1]);
        self.events.push(event);
        Ok(())
    }

    /// Moves the caret of the active document to a 0-based position.
    pub fn move_caret(&mut self, row: usize, col: usize) -> Result<()> {
        let (window_id, window) = self.active_window_mut()?;
        let Some(doc) = window.active.and_then(|i| window.documents.get_mut(i)) else {
            bail!("No active document in {}", window_id);
        };
        doc.row = row;
        doc.col = col;
        let event = selection_event(window_id, doc);
        self.events.push(event);
        Ok(())
    }

    /// Closes the document with `path` in the active window.
    ///
    /// Returns false if it was not open.
    pub fn close_document(&mut self, path: &str) -> Result<bool> {
        let (_, window) = self.active_window_mut()?;
        let Some(index) = window.position_of(path) else {
            return Ok(false);
        };
        window.documents.remove(index);
        window.active = match window.active {
            _ if window.documents.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(window.documents.len() - 1)),
            other => other,
        };
        Ok(true)
    }

    /// The active document of the active window.
    pub fn active_document(&self) -> Option<&Document> {
        let window = self.windows.get(&self.active_window?)?;
        window.documents.get(window.active?)
    }

    /// Paths of the named documents open in `window`.
    pub fn open_paths(&self, window: WindowId) -> Vec<&str> {
        self.windows
            .get(&window)
            .map(|w| {
                w.documents
                    .iter()
                    .filter_map(|doc| doc.path.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drains the selection events queued since the last call.
    pub fn take_events(&mut self) -> Vec<SelectionEvent> {
        mem::take(&mut self.events)
    }

    /// Every position opened through [`Host::open_file`], in order.
    pub fn opened(&self) -> &[EncodedPosition] {
        &self.opened
    }

    fn active_window_mut(&mut self) -> Result<(WindowId, &mut Window)> {
        let Some(id) = self.active_window else {
            bail!("No active window");
        };
        let window = self.windows.entry(id).or_default();
        Ok((id, window))
    }
}

impl Host for Workspace {
    fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    fn is_open(&self, window: WindowId, path: &str) -> bool {
        self.windows
            .get(&window)
            .is_some_and(|w| w.position_of(path).is_some())
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn open_file(&mut self, window: WindowId, position: &EncodedPosition) -> Result<()> {
        if self.active_window != Some(window) {
            self.focus_window(window);
        }
        self.open_document(
            &position.path,
            position.line.saturating_sub(1),
            position.col.saturating_sub(1),
        )?;
        self.opened.push(position.clone());
        Ok(())
    }

    fn retarget(&mut self, window: WindowId, old_path: &str, new_path: &str) -> bool {
        let Some(w) = self.windows.get_mut(&window) else {
            return false;
        };
        match w.position_of(old_path) {
            Some(index) => {
                w.documents[index].path = Some(new_path.to_string());
                true
            }
            None => false,
        }
    }
}

fn selection_event(window: WindowId, doc: &Document) -> SelectionEvent {
    SelectionEvent {
        window,
        path: doc.path.clone(),
        row: doc.row,
        col: doc.col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_keeps_active_index_valid() {
        let mut ws = Workspace::new();
        ws.focus_window(WindowId(1));
        ws.open_document("a.txt", 0, 0).unwrap();
        ws.open_document("b.txt", 0, 0).unwrap();
        ws.open_document("c.txt", 4, 2).unwrap();

        assert!(ws.close_document("a.txt").unwrap());
        assert_eq!(
            ws.active_document().and_then(|d| d.path.as_deref()),
            Some("c.txt")
        );
        assert!(ws.close_document("c.txt").unwrap());
        assert_eq!(
            ws.active_document().and_then(|d| d.path.as_deref()),
            Some("b.txt")
        );
        assert!(!ws.close_document("missing.txt").unwrap());
    }

    #[test]
    fn test_no_active_window_is_an_error() {
        let mut ws = Workspace::new();
        assert!(ws.open_document("a.txt", 0, 0).is_err());
        assert!(ws.move_caret(1, 1).is_err());
    }

    #[test]
    fn test_reopening_switches_without_duplicating() {
        let mut ws = Workspace::new();
        ws.focus_window(WindowId(1));
        ws.open_document("a.txt", 0, 0).unwrap();
        ws.open_document("a.txt", 9, 0).unwrap();
        assert_eq!(ws.open_paths(WindowId(1)), vec!["a.txt"]);
        assert_eq!(ws.take_events().len(), 2);
        assert!(ws.take_events().is_empty());
    }
}
