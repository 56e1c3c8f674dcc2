//! Settings storage
//!
//! Manages persistence of user preferences and sync settings.

use crate::quotes::MergeStrategy;
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Mock endpoint the quotes are synced against
pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Endpoint used to fetch and push quotes
    pub server_url: String,
    /// Seconds between two automatic syncs
    pub sync_interval_secs: u64,
    /// Number of server items turned into quotes per fetch
    pub fetch_limit: usize,
    /// How automatic syncs merge server quotes into the list
    pub timer_merge: MergeStrategy,
    /// How "Load from Server" merges server quotes into the list
    pub manual_merge: MergeStrategy,
    /// How long the sync banner stays visible
    pub notification_secs: u64,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
    /// Run the periodic sync at all
    pub auto_sync: bool,
    /// Post newly added quotes to the server
    pub push_new_quotes: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            sync_interval_secs: 30,
            fetch_limit: 5,
            timer_merge: MergeStrategy::Prepend,
            manual_merge: MergeStrategy::Append,
            notification_secs: 5,
            request_timeout_secs: 10,
            auto_sync: true,
            push_new_quotes: true,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.server_url.trim().is_empty() {
            self.server_url = DEFAULT_SERVER_URL.to_string();
        }

        self.sync_interval_secs = self.sync_interval_secs.clamp(5, 3600);
        self.fetch_limit = self.fetch_limit.clamp(1, 100);
        self.notification_secs = self.notification_secs.clamp(1, 60);
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 120);
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// A missing file is created with the defaults so it can be edited by hand.
/// Returns default settings if the file can't be read or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, writing defaults to {:?}", path);
        let settings = AppSettings::default();
        save_settings_to(&settings, path)?;
        return Ok(settings);
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;

    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to a specific file
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
