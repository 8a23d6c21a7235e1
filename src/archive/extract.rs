//! ZIP archive extraction.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use zip::read::ZipFile;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Counts of what an extraction wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
    /// Entries whose path would leave the destination directory.
    pub skipped: usize,
}

/// Extract every entry of a ZIP archive into `dest`.
///
/// Existing files are overwritten. Entries with absolute paths or `..`
/// segments are skipped. The first entry that cannot be read or written
/// aborts the extraction.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<ExtractSummary> {
    debug!(?archive_path, ?dest, "extracting ZIP archive");

    let file = File::open(archive_path).map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        reason: format!("failed to open ZIP archive: {}", e),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        reason: format!("failed to read ZIP archive: {}", e),
    })?;

    let mut summary = ExtractSummary::default();

    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(|e| Error::Archive {
            path: archive_path.to_path_buf(),
            reason: format!("failed to read ZIP entry {}: {}", i, e),
        })?;

        extract_entry(entry, dest, &mut summary)?;
    }

    debug!(
        ?archive_path,
        files = summary.files,
        directories = summary.directories,
        skipped = summary.skipped,
        "ZIP extraction complete"
    );

    Ok(summary)
}

fn extract_entry(mut entry: ZipFile<'_>, dest: &Path, summary: &mut ExtractSummary) -> Result<()> {
    let out_path = match entry.enclosed_name() {
        Some(path) => dest.join(path),
        None => {
            warn!("skipping entry with unsafe path: {}", entry.name());
            summary.skipped += 1;
            return Ok(());
        }
    };

    if entry.is_dir() {
        fs::create_dir_all(&out_path)?;
        summary.directories += 1;
        return Ok(());
    }

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    remove_if_readonly(&out_path)?;

    let mut outfile = File::create(&out_path)?;
    io::copy(&mut entry, &mut outfile).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("failed to extract {}: {}", out_path.display(), e),
        ))
    })?;
    drop(outfile);

    if let Some(mode) = entry.unix_mode() {
        apply_mode(&out_path, mode)?;
    }

    summary.files += 1;
    Ok(())
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777))?;
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// A read-only file left by an earlier run cannot be truncated in place.
fn remove_if_readonly(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() && meta.permissions().readonly() => {
            fs::remove_file(path)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
