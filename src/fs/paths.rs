//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Get the output directory for a dataset.
pub fn get_entry_folder(base_dir: &Path, name: &str) -> Result<PathBuf> {
    Ok(base_dir.join(sanitize_path_component(name)?))
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
