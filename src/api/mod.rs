//! Chaos index API module.
//!
//! This module provides:
//! - HTTP client for the dataset index and archives
//! - Index entry types

pub mod client;
pub mod types;

pub use client::ChaosClient;
pub use types::{Index, IndexEntry};
