//! Filesystem access used by the generator.

use std::{fs, path::Path};

use eyre::{Context, Result};

/// Check whether a path exists. Never fails; unreadable paths count as missing.
pub fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// Create a directory (and its parents) unless it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .wrap_err_with(|| format!("failed to create directory '{}'", path.display()))
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
}

/// Write text to a file, creating its parent directory first.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Remove a file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).wrap_err_with(|| format!("failed to remove '{}'", path.display()))
}
