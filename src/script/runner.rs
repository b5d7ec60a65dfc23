//! Replays a parsed script against a [`Workspace`].
//!
//! The runner plays the part of an editor's event loop: each command acts
//! on the workspace, then any selection changes it caused are delivered to
//! the [`Navigator`] before the next command runs.

use super::parser::Command;
use crate::config::Config;
use crate::history::registry::WindowId;
use crate::history::tracker::HistorySnapshot;
use crate::host::rename::rename_document;
use crate::host::{Direction, Host, Navigator, Workspace};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

/// One window's history as printed by `dump`.
#[derive(Debug, Clone, Serialize)]
pub struct WindowDump {
    pub window: WindowId,
    #[serde(flatten)]
    pub history: HistorySnapshot,
}

/// Executes script commands and collects their output lines.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    workspace: Workspace,
    navigator: Navigator,
    output: Vec<String>,
}

impl ScriptRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            workspace: Workspace::new(),
            navigator: Navigator::from_config(config),
            output: Vec::new(),
        }
    }

    /// Runs every command in order.
    ///
    /// # Errors
    ///
    /// Stops at the first command that fails, e.g. `open` with no active
    /// window or `delete` of a missing file.
    pub fn run(&mut self, commands: &[Command]) -> Result<()> {
        for (index, command) in commands.iter().enumerate() {
            self.execute(command)
                .with_context(|| format!("command {} ({:?}) failed", index + 1, command))?;
        }
        Ok(())
    }

    /// Runs a single command and delivers the resulting selection events.
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Window(id) => self.workspace.focus_window(*id),
            Command::Open(position) => self.workspace.open_document(
                &position.path,
                position.line.saturating_sub(1),
                position.col.saturating_sub(1),
            )?,
            Command::Scratch => self.workspace.open_scratch()?,
            Command::Move { line, col } => self
                .workspace
                .move_caret(line.saturating_sub(1), col.saturating_sub(1))?,
            Command::Close(path) => {
                if !self.workspace.close_document(path)? {
                    self.output.push(format!("close: {} is not open", path));
                }
            }
            Command::Delete(path) => {
                fs::remove_file(path).with_context(|| format!("Failed to delete {}", path))?
            }
            Command::Back => self.navigate(Direction::Back),
            Command::Forward => self.navigate(Direction::Forward),
            Command::Rename(new_name) => self.rename(new_name)?,
            Command::Dump => {
                let dump = self.dump();
                self.output.push(serde_json::to_string_pretty(&dump)?);
            }
        }
        self.deliver_events();
        Ok(())
    }

    fn navigate(&mut self, direction: Direction) {
        let label = match direction {
            Direction::Back => "back",
            Direction::Forward => "forward",
        };
        match self.navigator.navigate(&mut self.workspace, direction) {
            Some(location) => self.output.push(format!("{} -> {}", label, location)),
            None => self.output.push(format!("{}: nothing to do", label)),
        }
    }

    fn rename(&mut self, new_name: &str) -> Result<()> {
        let window = self
            .workspace
            .active_window()
            .context("Unable to rename: no active window")?;
        let path = self
            .workspace
            .active_document()
            .and_then(|doc| doc.path.clone());
        let new_path = rename_document(&mut self.workspace, window, path.as_deref(), new_name)?;
        self.output
            .push(format!("renamed -> {}", new_path.display()));
        Ok(())
    }

    fn deliver_events(&mut self) {
        for event in self.workspace.take_events() {
            self.navigator.on_selection_modified(&event);
        }
    }

    /// Snapshot of every window's history in first-seen order.
    pub fn dump(&self) -> Vec<WindowDump> {
        self.navigator
            .windows()
            .map(|(window, history)| WindowDump {
                window,
                history: history.snapshot(),
            })
            .collect()
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}
