//! Back/forward navigation history for text editors.
//!
//! As the caret moves between files, significant jumps are recorded per
//! window so the user can step backward and forward through them. Small
//! movements near the last recorded position are ignored, and entries whose
//! file has disappeared are skipped when traversed.
//!
//! - [`history`]: The editor-independent history core
//! - [`host`]: Editor integration and navigation actions
//! - [`script`]: Scripted event replay used by the CLI
//! - [`config`]: User configuration

pub mod config;
pub mod history;
pub mod host;
pub mod script;
