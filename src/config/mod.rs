//! Configuration system for navhistory.
//!
//! This module provides the configuration structure with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is
//! loaded from a TOML file and can be overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use navhistory::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.history_size, 64);
//! assert_eq!(config.line_threshold, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     history_size: 16,
//!     ..Config::default()
//! };
//! assert!(custom.skip_stale);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for navigation history.
///
/// # Fields
///
/// * `history_size` - Entries kept in each of the back and forward stacks (default: 64)
/// * `line_threshold` - Movements within this many lines are not recorded (default: 2)
/// * `skip_stale` - Skip entries whose file is gone and not open (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Entries kept in each of the back and forward stacks
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Movements within this many lines of the last one are not recorded
    #[serde(default = "default_line_threshold")]
    pub line_threshold: usize,

    /// Skip entries whose file no longer exists and is not open
    #[serde(default = "default_skip_stale")]
    pub skip_stale: bool,
}

/// Returns the default stack capacity.
fn default_history_size() -> usize {
    crate::history::MAX_SIZE
}

/// Returns the default line threshold.
fn default_line_threshold() -> usize {
    crate::history::LINE_THRESHOLD
}

fn default_skip_stale() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            line_threshold: default_line_threshold(),
            skip_stale: default_skip_stale(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/navhistory/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("navhistory");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
