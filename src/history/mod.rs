//! Navigation history core.
//!
//! This module holds the editor-independent part of back/forward navigation:
//! locations, the bounded stacks that hold them, the per-window history
//! state machine, and the registry mapping windows to their histories.
//! Nothing here touches the filesystem or an editor; checking whether an
//! entry can still be opened is left to the caller (see [`crate::host`]).
//!
//! # Modules
//!
//! - `location`: Positions and the "near" proximity test
//! - `bounded`: Fixed-capacity deque with oldest-first eviction
//! - `tracker`: The per-window `History`
//! - `registry`: Window id to `History` table

pub mod bounded;
pub mod location;
pub mod registry;
pub mod tracker;

pub use location::{Location, LINE_THRESHOLD};
pub use registry::{HistoryRegistry, WindowId};
pub use tracker::{History, HistorySnapshot, MAX_SIZE};
