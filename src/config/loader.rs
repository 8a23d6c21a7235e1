//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the dataset index.
pub const DEFAULT_INDEX_URL: &str = "https://chaos-data.projectdiscovery.io/index.json";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Remote index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON index listing datasets.
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Filesystem output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one subdirectory per dataset.
    #[serde(default = "default_base_directory")]
    pub base_directory: PathBuf,

    /// File that receives the concatenated text content.
    #[serde(default = "default_combined_file")]
    pub combined_file: PathBuf,

    /// File name suffix selecting which extracted files are concatenated.
    #[serde(default = "default_text_extension")]
    pub text_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_directory: default_base_directory(),
            combined_file: default_combined_file(),
            text_extension: default_text_extension(),
        }
    }
}

/// Run options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Whether to show progress bars for large downloads.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Directory for staging downloaded archives (system temp dir if unset).
    #[serde(default)]
    pub temp_directory: Option<PathBuf>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            temp_directory: None,
        }
    }
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_user_agent() -> String {
    format!("chaos-downloader/{}", env!("CARGO_PKG_VERSION"))
}

fn default_base_directory() -> PathBuf {
    PathBuf::from(".").join("AllChaosData")
}

fn default_combined_file() -> PathBuf {
    PathBuf::from(".").join("everything.txt")
}

fn default_text_extension() -> String {
    ".txt".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
