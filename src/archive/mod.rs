//! Archive module.
//!
//! Recreates the directory and file structure of downloaded ZIP archives.

pub mod extract;

pub use extract::{extract_zip, ExtractSummary};
