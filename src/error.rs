//! Error types for the chaos-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Selection errors
    #[error("Failed to read name list {}: {source}", .path.display())]
    NameList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Index errors
    #[error("Index error: {0}")]
    Index(String),

    #[error("Failed to decode index: {0}")]
    IndexDecode(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // Archive errors
    #[error("Archive error ({}): {reason}", .path.display())]
    Archive { path: PathBuf, reason: String },

    // File system errors
    #[error("Invalid path component: {0}")]
    InvalidPathComponent(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NETWORK_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
