//! Index type definitions.

use serde::{Deserialize, Serialize};

/// One dataset listed in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Decoded index together with the number of elements that were dropped.
#[derive(Debug, Default)]
pub struct Index {
    pub entries: Vec<IndexEntry>,
    pub skipped: usize,
}

impl Index {
    /// Decode an index body.
    ///
    /// The body must be a JSON array. Elements that do not have a string
    /// `name` and `URL` are skipped and counted.
    pub fn from_json(body: &str) -> crate::error::Result<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(body)
            .map_err(|e| crate::error::Error::IndexDecode(e.to_string()))?;

        let mut index = Index::default();
        for (position, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<IndexEntry>(value) {
                Ok(entry) => index.entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping index element {}: {}", position, e);
                    index.skipped += 1;
                }
            }
        }

        Ok(index)
    }
}
