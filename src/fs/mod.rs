//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Name sanitization and extension matching

pub mod naming;
pub mod paths;

pub use naming::{has_extension, sanitize_path_component};
pub use paths::{ensure_dir, get_entry_folder};
