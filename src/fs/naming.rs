//! File and directory name handling.

use std::path::Path;

use crate::error::{Error, Result};

/// Sanitize a dataset name for use as a single directory name.
///
/// Path separators are replaced with underscores, as are the characters
/// Windows reserves in file names when building for Windows. Names that would
/// resolve to the current or parent directory are rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidPathComponent(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| if is_replaced(c) { '_' } else { c })
        .collect();

    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidPathComponent(
            "Name cannot be empty or whitespace-only".to_string(),
        ));
    }

    if trimmed == "." || trimmed == ".." {
        return Err(Error::InvalidPathComponent(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

#[cfg(not(windows))]
fn is_replaced(c: char) -> bool {
    c == '/' || c == '\\'
}

#[cfg(windows)]
fn is_replaced(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Check whether a file name ends with the given extension (case-sensitive).
///
/// The comparison is done on the raw name bytes, so names that are not valid
/// UTF-8 still match.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|n| n.as_encoded_bytes().ends_with(extension.as_bytes()))
        .unwrap_or(false)
}
