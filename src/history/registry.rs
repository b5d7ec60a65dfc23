//! Window-keyed table of histories.

use super::location::LINE_THRESHOLD;
use super::tracker::{History, MAX_SIZE};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of an editor window, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window {}", self.0)
    }
}

/// Owns one [`History`] per window.
///
/// Histories are created the first time a window is looked up and are kept
/// for the lifetime of the registry. Windows are listed in the order they
/// were first seen.
#[derive(Debug, Clone)]
pub struct HistoryRegistry {
    histories: IndexMap<WindowId, History>,
    max_size: usize,
    line_threshold: usize,
}

impl HistoryRegistry {
    /// Creates an empty registry whose histories use the default limits.
    pub fn new() -> Self {
        Self::with_limits(MAX_SIZE, LINE_THRESHOLD)
    }

    /// Creates an empty registry whose histories use the given stack
    /// capacity and line threshold.
    pub fn with_limits(max_size: usize, line_threshold: usize) -> Self {
        Self {
            histories: IndexMap::new(),
            max_size,
            line_threshold,
        }
    }

    /// Returns the history for `window`, creating it if needed.
    pub fn get_or_create(&mut self, window: WindowId) -> &mut History {
        let (max_size, line_threshold) = (self.max_size, self.line_threshold);
        self.histories.entry(window).or_insert_with(|| {
            debug!("creating history for {}", window);
            History::with_limits(max_size, line_threshold)
        })
    }

    /// Returns the history for `window` if one has been created.
    pub fn get(&self, window: WindowId) -> Option<&History> {
        self.histories.get(&window)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.histories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    /// Iterates over windows and their histories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &History)> {
        self.histories.iter().map(|(&id, history)| (id, history))
    }
}

impl Default for HistoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
