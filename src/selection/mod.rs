//! Dataset selection.
//!
//! A [`Selection`] decides which index entries are processed. Names are
//! compared case-insensitively.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::api::IndexEntry;
use crate::error::{Error, Result};

/// Which index entries to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Process every entry in the index.
    All,
    /// Process only entries whose lowercased name is in the set.
    Names(HashSet<String>),
}

impl Selection {
    /// Build a selection from a comma-separated list of names.
    pub fn from_list(list: &str) -> Self {
        Selection::Names(normalize(list.split(',')))
    }

    /// Build a selection from a file containing one name per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let to_error = |source| Error::NameList {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(to_error)?;

        Ok(Selection::Names(normalize(lines.iter().map(String::as_str))))
    }

    /// Check whether an entry name is selected.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Names(names) => names.contains(&name.to_lowercase()),
        }
    }

    /// Selected names that have no counterpart in the index, sorted.
    pub fn unmatched(&self, entries: &[IndexEntry]) -> Vec<String> {
        let Selection::Names(names) = self else {
            return Vec::new();
        };

        let available: HashSet<String> = entries.iter().map(|e| e.name.to_lowercase()).collect();
        let mut missing: Vec<String> = names.difference(&available).cloned().collect();
        missing.sort();
        missing
    }
}

fn normalize<'a>(tokens: impl Iterator<Item = &'a str>) -> HashSet<String> {
    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
