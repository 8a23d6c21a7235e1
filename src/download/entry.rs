//! Per-entry download and extraction.

use std::path::Path;

use futures::StreamExt;
use reqwest::Response;
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{ChaosClient, IndexEntry};
use crate::archive::extract_zip;
use crate::config::Config;
use crate::download::state::{DownloadState, EntryOutcome};
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, get_entry_folder};
use crate::output::{create_download_bar, print_error, print_info};
use crate::selection::Selection;

/// Minimum archive size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download and extract every selected entry, one at a time.
///
/// A failing entry is reported and recorded; the loop always continues.
pub async fn process_entries(
    client: &ChaosClient,
    config: &Config,
    entries: &[IndexEntry],
    selection: &Selection,
) -> DownloadState {
    let mut state = DownloadState::default();

    for entry in entries.iter().filter(|e| selection.matches(&e.name)) {
        state.selected += 1;
        print_info(&format!("Processing {}...", entry.name));

        match process_entry(client, config, entry).await {
            Ok(outcome) => {
                tracing::debug!(
                    "Extracted {} files into {}",
                    outcome.extract.files,
                    outcome.directory.display()
                );
                state.record_success(&outcome);
            }
            Err(e) => {
                print_error(&format!("Failed to process {}: {}", entry.name, e));
                state.record_failure(&entry.name, e);
            }
        }
    }

    state
}

/// Download a single entry's archive and extract it below the base directory.
///
/// The archive is staged in a temporary file that is removed when this
/// function returns, whatever the outcome.
pub async fn process_entry(
    client: &ChaosClient,
    config: &Config,
    entry: &IndexEntry,
) -> Result<EntryOutcome> {
    let response = client.download_file(&entry.url).await?;

    let archive = create_temp_archive(config.options.temp_directory.as_deref())?;
    let bytes_downloaded = write_response(response, &archive, config.options.show_progress).await?;

    let directory = get_entry_folder(&config.output.base_directory, &entry.name)?;
    ensure_dir(&directory)?;

    let archive_path = archive.path().to_path_buf();
    let dest = directory.clone();
    let extract = tokio::task::spawn_blocking(move || extract_zip(&archive_path, &dest))
        .await
        .map_err(|e| Error::Archive {
            path: archive.path().to_path_buf(),
            reason: format!("extraction task panicked: {}", e),
        })??;

    Ok(EntryOutcome {
        directory,
        bytes_downloaded,
        extract,
    })
}

fn create_temp_archive(temp_dir: Option<&Path>) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("chaos-").suffix(".zip");

    let file = match temp_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };

    Ok(file)
}

/// Stream a response body into the staged archive file.
async fn write_response(
    response: Response,
    archive: &NamedTempFile,
    show_progress: bool,
) -> Result<u64> {
    let content_length = response.content_length();
    let progress = if show_progress
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
    {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    let mut file = File::from_std(archive.as_file().try_clone()?);
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}

