//! Persistent storage
//!
//! This module handles all data persistence for quotes, the selected category,
//! and application settings.

pub mod local;
pub mod quotes;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

pub use local::{FileStore, KeyValueStore, MemoryStore};

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the data directory")]
    NoDataDir,
}

/// Get the per-user data directory
///
/// The directory is not created here; writers create it on demand.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "QuoteBook", "QuoteBook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
