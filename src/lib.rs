//! Chaos Downloader - fetch, extract and merge Chaos datasets.
//!
//! This library downloads the ZIP archives listed in the Chaos dataset index,
//! extracts each into its own directory and merges every text file into one
//! combined output file.
//!
//! # Features
//!
//! - Select datasets by comma-separated list, name file, or all
//! - Per-dataset failure isolation
//! - Guarded ZIP extraction that never writes outside the target directory
//! - Deterministic merge order
//!
//! # Example
//!
//! ```no_run
//! use chaos_downloader::{run_pipeline, Config, Selection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let selection = Selection::from_list("tesla, google");
//!     let report = run_pipeline(&config, &selection).await?;
//!     println!("{} datasets merged into {}", report.download.completed, report.concat.output.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod archive;
pub mod cli;
pub mod concat;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod selection;

// Re-exports for convenience
pub use api::{ChaosClient, IndexEntry};
pub use config::Config;
pub use download::{process_entries, run_pipeline, DownloadState, RunReport};
pub use error::{Error, Result};
pub use selection::Selection;
