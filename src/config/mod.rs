//! Configuration module for the chaos-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, OutputConfig, SourceConfig, DEFAULT_INDEX_URL};
pub use validation::{validate_config, validate_extension, validate_index_url};
