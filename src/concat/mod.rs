//! Text file concatenation.
//!
//! Walks the extracted tree and merges every matching file into a single
//! output file. Siblings are visited in file name order so the result is
//! reproducible between runs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::fs::has_extension;

/// Outcome of a concatenation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatSummary {
    pub output: PathBuf,
    pub appended: usize,
    pub failed: usize,
    pub bytes_written: u64,
}

/// Find every file below `root` whose name ends with `extension`.
///
/// Symlinks to regular files are included. Unreadable directories are logged
/// and skipped. `exclude` is compared by canonical path and never returned,
/// even when it does not exist yet.
pub fn find_text_files(root: &Path, extension: &str, exclude: Option<&Path>) -> Vec<PathBuf> {
    let exclude = exclude.and_then(canonical_target);
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable path under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.path().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        if let Some(ref excluded) = exclude {
            if fs::canonicalize(entry.path()).ok().as_ref() == Some(excluded) {
                tracing::debug!("Not reading output file {}", entry.path().display());
                continue;
            }
        }

        files.push(entry.into_path());
    }

    files
}

// Canonical form of a path whose final component may not exist yet.
fn canonical_target(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = fs::canonicalize(path) {
        return Some(canonical);
    }
    let name = path.file_name()?;
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::canonicalize(parent).ok()?,
        None => std::env::current_dir().ok()?,
    };
    Some(parent.join(name))
}

/// Concatenate every matching file under `base_dir` into `output`.
///
/// The output is truncated first and always created. Each source file is
/// followed by a newline. Files that cannot be read are logged and counted.
pub fn concatenate(base_dir: &Path, output: &Path, extension: &str) -> Result<ConcatSummary> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let files = find_text_files(base_dir, extension, Some(output));
    tracing::debug!("Found {} {} files under {}", files.len(), extension, base_dir.display());

    concat_files(&files, output)
}

/// Write `files` into `output` in the given order, each followed by a newline.
///
/// `output` is created or truncated. A file that cannot be opened or copied
/// is logged, counted as failed, and does not stop the remaining files.
pub fn concat_files(files: &[PathBuf], output: &Path) -> Result<ConcatSummary> {
    let mut dest = BufWriter::new(File::create(output)?);

    let mut summary = ConcatSummary {
        output: output.to_path_buf(),
        appended: 0,
        failed: 0,
        bytes_written: 0,
    };

    for path in files {
        let mut src = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to open {} for reading: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        match io::copy(&mut src, &mut dest) {
            Ok(bytes) => summary.bytes_written += bytes,
            Err(e) => {
                tracing::warn!(
                    "Failed to copy {} to {}: {}",
                    path.display(),
                    output.display(),
                    e
                );
                summary.failed += 1;
                continue;
            }
        }

        match dest.write_all(b"\n") {
            Ok(()) => summary.bytes_written += 1,
            Err(e) => tracing::warn!("Failed to write newline after {}: {}", path.display(), e),
        }

        summary.appended += 1;
    }

    dest.flush()?;
    Ok(summary)
}
