//! Download module for dataset archives.
//!
//! This module provides:
//! - Download state tracking
//! - Per-entry download and extraction
//! - The complete index-to-merge run

pub mod entry;
pub mod pipeline;
pub mod state;

pub use entry::{process_entries, process_entry};
pub use pipeline::{list_entries, run_pipeline, RunReport};
pub use state::{DownloadState, EntryFailure, EntryOutcome};
