//! Full download run: index, selection, per-entry processing, merge.

use crate::api::ChaosClient;
use crate::concat::{concatenate, ConcatSummary};
use crate::config::Config;
use crate::download::entry::process_entries;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::output::{create_spinner, print_warning};
use crate::selection::Selection;

/// Everything a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub download: DownloadState,
    pub concat: ConcatSummary,
    /// Index elements dropped because they lacked a name or URL.
    pub index_skipped: usize,
    /// Selected names that do not appear in the index.
    pub unmatched: Vec<String>,
}

/// Run the whole pipeline against the configured index.
///
/// Setup failures (base directory, index fetch, combined file creation) are
/// returned as errors. Individual entry failures are recorded in the report.
pub async fn run_pipeline(config: &Config, selection: &Selection) -> Result<RunReport> {
    ensure_dir(&config.output.base_directory)?;

    let client = ChaosClient::new(&config.source)?;

    let spinner = config
        .options
        .show_progress
        .then(|| create_spinner(&format!("Fetching index from {}", client.index_url())));
    let index = client.fetch_index().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let index = index?;

    tracing::info!("Index lists {} datasets", index.entries.len());
    if index.skipped > 0 {
        print_warning(&format!(
            "Skipped {} index element(s) without a name or URL",
            index.skipped
        ));
    }

    let unmatched = selection.unmatched(&index.entries);
    if !unmatched.is_empty() {
        print_warning(&format!(
            "No index entry for: {}",
            unmatched.join(", ")
        ));
    }

    let download = process_entries(&client, config, &index.entries, selection).await;

    let base_dir = config.output.base_directory.clone();
    let output = config.output.combined_file.clone();
    let extension = config.output.text_extension.clone();
    let concat = tokio::task::spawn_blocking(move || concatenate(&base_dir, &output, &extension))
        .await
        .map_err(|e| std::io::Error::other(format!("concatenation task failed: {}", e)))??;

    Ok(RunReport {
        download,
        concat,
        index_skipped: index.skipped,
        unmatched,
    })
}

/// Fetch the index and return entry names in index order.
pub async fn list_entries(config: &Config) -> Result<Vec<String>> {
    let client = ChaosClient::new(&config.source)?;
    let index = client.fetch_index().await?;
    Ok(index.entries.into_iter().map(|e| e.name).collect())
}
