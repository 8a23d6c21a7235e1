//! Download state tracking.

use std::path::PathBuf;

use crate::archive::ExtractSummary;

/// An entry that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    pub name: String,
    pub reason: String,
}

/// Result of processing a single index entry.
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub directory: PathBuf,
    pub bytes_downloaded: u64,
    pub extract: ExtractSummary,
}

/// Statistics for one pass over the index.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub selected: u64,
    pub completed: u64,
    pub failures: Vec<EntryFailure>,
    pub files_extracted: u64,
    pub unsafe_entries: u64,
    pub bytes_downloaded: u64,
}

impl DownloadState {
    /// Record a successfully processed entry.
    pub fn record_success(&mut self, outcome: &EntryOutcome) {
        self.completed += 1;
        self.files_extracted += outcome.extract.files as u64;
        self.unsafe_entries += outcome.extract.skipped as u64;
        self.bytes_downloaded += outcome.bytes_downloaded;
    }

    /// Record an entry that failed.
    pub fn record_failure(&mut self, name: &str, reason: impl ToString) {
        self.failures.push(EntryFailure {
            name: name.to_string(),
            reason: reason.to_string(),
        });
    }

    /// Number of failed entries.
    pub fn failed(&self) -> u64 {
        self.failures.len() as u64
    }
}
