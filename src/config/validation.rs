//! Configuration validation logic.

use std::path::Path;

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_index_url(&config.source.index_url)?;
    validate_path("base_directory", &config.output.base_directory)?;
    validate_path("combined_file", &config.output.combined_file)?;
    validate_extension(&config.output.text_extension)?;

    if config.output.combined_file.is_dir() {
        return Err(Error::ConfigValidation {
            field: "combined_file".to_string(),
            message: format!(
                "{} is a directory",
                config.output.combined_file.display()
            ),
        });
    }

    Ok(())
}

/// Validate the index URL.
pub fn validate_index_url(index_url: &str) -> Result<()> {
    let url = Url::parse(index_url)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "index_url".to_string(),
            message: format!("Unsupported scheme '{}' (expected http or https)", other),
        }),
    }
}

/// Validate the text extension used to select files for concatenation.
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::ConfigValidation {
            field: "text_extension".to_string(),
            message: "Extension cannot be empty".to_string(),
        });
    }

    if extension.contains('/') || extension.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "text_extension".to_string(),
            message: format!("Extension cannot contain path separators: '{}'", extension),
        });
    }

    Ok(())
}

fn validate_path(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    Ok(())
}
