//! Per-window back/forward navigation history.

use super::bounded::BoundedDeque;
use super::location::{Location, LINE_THRESHOLD};
use log::{debug, trace};
use serde::Serialize;

/// Default number of entries kept in each of the back and forward stacks.
pub const MAX_SIZE: usize = 64;

/// Back/forward history for a single window.
///
/// The history keeps a `current` location with a stack of older locations
/// behind it and a stack of newer ones ahead of it. Cursor movements are fed
/// in through [`History::record_movement`]; only movements that leave the
/// neighbourhood of the previously recorded one become history entries.
///
/// Recording a new entry discards everything ahead of `current`, the same way
/// a browser drops its forward history when you follow a new link.
///
/// # Examples
///
/// ```
/// use navhistory::history::location::Location;
/// use navhistory::history::tracker::History;
///
/// let mut history = History::new();
/// history.record_movement(&Location::new("a.txt", 1, 1));
/// history.record_movement(&Location::new("a.txt", 50, 1));
///
/// assert_eq!(history.back(), Some(Location::new("a.txt", 1, 1)));
/// assert_eq!(history.forward(), Some(Location::new("a.txt", 50, 1)));
/// assert_eq!(history.forward(), None);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    /// Where the history considers us to be
    current: Option<Location>,
    /// Entries before `current`, oldest first
    back: BoundedDeque<Location>,
    /// Entries after `current`, nearest first
    forward: BoundedDeque<Location>,
    /// Last recorded movement, the baseline for `has_changed`
    last_movement: Option<Location>,
    line_threshold: usize,
}

/// Serializable view of a history's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySnapshot {
    pub current: Option<Location>,
    pub back: Vec<Location>,
    pub forward: Vec<Location>,
}

impl History {
    /// Creates an empty history with [`MAX_SIZE`] entries per stack and the
    /// default line threshold.
    pub fn new() -> Self {
        Self::with_limits(MAX_SIZE, LINE_THRESHOLD)
    }

    /// Creates an empty history with explicit stack capacity and line
    /// threshold.
    pub fn with_limits(max_size: usize, line_threshold: usize) -> Self {
        Self {
            current: None,
            back: BoundedDeque::new(max_size),
            forward: BoundedDeque::new(max_size),
            last_movement: None,
            line_threshold,
        }
    }

    /// Records a cursor movement, pushing a history entry if it is far
    /// enough from the last recorded movement.
    ///
    /// The movement always becomes the new baseline, even when no entry is
    /// pushed. `current` is left alone in that case.
    pub fn record_movement(&mut self, location: &Location) {
        if self.has_changed(location) {
            self.push(location);
        } else {
            trace!("movement to {} is near the last one, not recorded", location);
        }
        self.last_movement = Some(location.clone());
    }

    /// Returns true if moving to `location` is significant enough to be
    /// recorded.
    pub fn has_changed(&self, location: &Location) -> bool {
        match &self.last_movement {
            None => true,
            Some(last) => !last.near_within(location, self.line_threshold),
        }
    }

    /// Makes `location` current, moving the old current onto the back stack
    /// and dropping all forward history.
    pub fn push(&mut self, location: &Location) {
        if let Some(current) = self.current.take() {
            self.back.push_back(current);
        }
        debug!("history push {}", location);
        self.current = Some(location.clone());
        self.forward.clear();
    }

    /// Steps back one entry, returning the location to jump to.
    ///
    /// Returns `None` and leaves the history untouched if there is nothing
    /// behind `current`.
    pub fn back(&mut self) -> Option<Location> {
        let previous = self.back.pop_back()?;
        if let Some(current) = self.current.take() {
            self.forward.push_front(current);
        }
        debug!("history back to {}", previous);
        Some(self.arrive(previous))
    }

    /// Steps forward one entry, returning the location to jump to.
    ///
    /// Returns `None` and leaves the history untouched if there is nothing
    /// ahead of `current`.
    pub fn forward(&mut self) -> Option<Location> {
        let next = self.forward.pop_front()?;
        if let Some(current) = self.current.take() {
            self.back.push_back(current);
        }
        debug!("history forward to {}", next);
        Some(self.arrive(next))
    }

    // Jumping reports a selection change once the editor moves the caret;
    // marking it as the last movement keeps that report from being pushed.
    fn arrive(&mut self, location: Location) -> Location {
        self.last_movement = Some(location.clone());
        self.current = Some(location.clone());
        location
    }

    pub fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    pub fn last_movement(&self) -> Option<&Location> {
        self.last_movement.as_ref()
    }

    /// Entries behind `current`, oldest first.
    pub fn back_entries(&self) -> impl DoubleEndedIterator<Item = &Location> {
        self.back.iter()
    }

    /// Entries ahead of `current`, nearest first.
    pub fn forward_entries(&self) -> impl DoubleEndedIterator<Item = &Location> {
        self.forward.iter()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn max_size(&self) -> usize {
        self.back.capacity()
    }

    pub fn line_threshold(&self) -> usize {
        self.line_threshold
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            current: self.current.clone(),
            back: self.back.iter().cloned().collect(),
            forward: self.forward.iter().cloned().collect(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: usize) -> Location {
        Location::new("a.txt", line, 1)
    }

    #[test]
    fn test_first_movement_sets_current_without_back_entry() {
        let mut history = History::new();
        history.record_movement(&loc(1));
        assert_eq!(history.current(), Some(&loc(1)));
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_stored_entries_are_copies() {
        let mut history = History::new();
        let mut cursor = loc(1);
        history.record_movement(&cursor);
        cursor.line = 40;
        cursor.col = 7;
        assert_eq!(history.current().map(|l| (l.line, l.col)), Some((1, 1)));
    }

    #[test]
    fn test_custom_threshold() {
        let mut history = History::with_limits(8, 0);
        history.record_movement(&loc(1));
        history.record_movement(&loc(2));
        assert_eq!(history.back_entries().count(), 1);
        assert_eq!(history.max_size(), 8);
    }
}
