//! Selection tracking and back/forward navigation across windows.

use super::{EncodedPosition, Host, SelectionEvent};
use crate::config::Config;
use crate::history::location::Location;
use crate::history::registry::{HistoryRegistry, WindowId};
use crate::history::tracker::History;
use log::{debug, warn};

/// Which way to move through the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    fn step(self, history: &mut History) -> Option<Location> {
        match self {
            Direction::Back => history.back(),
            Direction::Forward => history.forward(),
        }
    }
}

/// Connects editor events to the per-window histories.
///
/// Selection changes are recorded into the history of the window they came
/// from. Back and forward actions act on the active window and skip entries
/// whose file has been deleted and is not open anywhere in that window.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: HistoryRegistry,
    skip_stale: bool,
}

impl Navigator {
    /// Creates a navigator with default limits.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a navigator using the history limits from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            registry: HistoryRegistry::with_limits(config.history_size, config.line_threshold),
            skip_stale: config.skip_stale,
        }
    }

    pub fn registry(&self) -> &HistoryRegistry {
        &self.registry
    }

    /// Returns the history of the active window, creating it on first use.
    ///
    /// Returns `None` if the host has no active window.
    pub fn history<H: Host + ?Sized>(&mut self, host: &H) -> Option<&mut History> {
        let window = host.active_window()?;
        Some(self.registry.get_or_create(window))
    }

    /// Records a selection change. Events from unnamed buffers are ignored.
    pub fn on_selection_modified(&mut self, event: &SelectionEvent) {
        let Some(location) = Location::from_caret(event.path.as_deref(), event.row, event.col)
        else {
            return;
        };
        self.registry
            .get_or_create(event.window)
            .record_movement(&location);
    }

    /// Goes back in the active window's history.
    ///
    /// Returns the location that was opened, or `None` if there was nothing
    /// usable to go back to.
    pub fn navigate_back<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<Location> {
        self.navigate(host, Direction::Back)
    }

    /// Goes forward in the active window's history.
    pub fn navigate_forward<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<Location> {
        self.navigate(host, Direction::Forward)
    }

    /// Steps through the history in `direction` until an entry that can
    /// still be opened is found, then opens it.
    pub fn navigate<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        direction: Direction,
    ) -> Option<Location> {
        let window = host.active_window()?;
        let history = self.registry.get_or_create(window);

        let mut location = direction.step(history)?;
        while self.skip_stale && !is_usable(&*host, window, &location) {
            debug!("skipping stale history entry {}", location);
            location = direction.step(history)?;
        }

        let target = EncodedPosition::from(&location);
        if let Err(err) = host.open_file(window, &target) {
            warn!("could not open {}: {:#}", target, err);
            return None;
        }
        Some(location)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &History)> {
        self.registry.iter()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_usable<H: Host + ?Sized>(host: &H, window: WindowId, location: &Location) -> bool {
    host.is_open(window, &location.path) || host.file_exists(&location.path)
}
