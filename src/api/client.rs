//! Chaos dataset HTTP client.

use reqwest::{Client, Response};

use crate::api::types::Index;
use crate::config::SourceConfig;
use crate::error::{Error, Result};

/// HTTP client for the dataset index and the archives it references.
pub struct ChaosClient {
    client: Client,
    index_url: String,
}

impl ChaosClient {
    /// Create a new client from the source configuration.
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&source.user_agent)
            .build()
            .map_err(|e| Error::Index(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            index_url: source.index_url.clone(),
        })
    }

    /// URL of the index this client reads.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Fetch and decode the dataset index.
    pub async fn fetch_index(&self) -> Result<Index> {
        tracing::debug!("GET {}", self.index_url);

        let response = self.client.get(&self.index_url).send().await?;
        let status = response.status();
        tracing::debug!("Index response status: {}", status);

        if !status.is_success() {
            return Err(Error::Index(format!(
                "Failed to fetch index {}: HTTP {}",
                self.index_url, status
            )));
        }

        let text = response.text().await?;
        tracing::debug!("Index response length: {} bytes", text.len());

        let index = Index::from_json(&text)?;
        tracing::debug!(
            "Decoded {} index entries ({} skipped)",
            index.entries.len(),
            index.skipped
        );

        Ok(index)
    }

    /// Start downloading an archive.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}
