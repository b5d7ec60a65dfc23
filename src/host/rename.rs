//! Renaming the file behind an open document.
//!
//! The file is renamed in place (same directory) and the open document is
//! pointed at the new path. History entries keep the old path; traversal
//! will skip them once the old file no longer exists.

use super::Host;
use crate::history::registry::WindowId;
use anyhow::{bail, Context, Result};
use log::info;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Renames the file of the document at `path` to `new_name` within the same
/// directory and retargets the open document in `window`.
///
/// # Errors
///
/// Returns an error if:
/// - The document has no path (an unsaved buffer)
/// - `new_name` is empty or contains a path separator
/// - The filesystem rename fails
pub fn rename_document<H: Host + ?Sized>(
    host: &mut H,
    window: WindowId,
    path: Option<&str>,
    new_name: &str,
) -> Result<PathBuf> {
    let Some(old) = path else {
        bail!("Unable to rename: document has no file name");
    };
    if new_name.is_empty() || new_name.contains(&['/', '\\'][..]) {
        bail!("Unable to rename: invalid file name '{}'", new_name);
    }

    let old_path = Path::new(old);
    let new_path = old_path
        .parent()
        .map(|dir| dir.join(new_name))
        .unwrap_or_else(|| PathBuf::from(new_name));

    fs::rename(old_path, &new_path)
        .with_context(|| format!("Unable to rename {} to {}", old, new_path.display()))?;

    let new_str = new_path.to_string_lossy();
    if host.retarget(window, old, &new_str) {
        info!("renamed {} to {}", old, new_str);
    }
    Ok(new_path)
}

/// The byte range of a file name to preselect in a rename prompt: the stem,
/// without the extension.
///
/// # Examples
///
/// ```
/// use navhistory::host::rename::stem_selection;
///
/// assert_eq!(stem_selection("main.rs"), 0..4);
/// assert_eq!(stem_selection("archive.tar.gz"), 0..11);
/// assert_eq!(stem_selection(".bashrc"), 0..7);
/// ```
pub fn stem_selection(file_name: &str) -> Range<usize> {
    let stem_len = Path::new(file_name)
        .file_stem()
        .map(|stem| stem.len())
        .unwrap_or(file_name.len());
    0..stem_len
}
