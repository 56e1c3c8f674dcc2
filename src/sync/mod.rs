//! Server sync
//!
//! Pulls quotes from the mock server and pushes new ones to it. At most one
//! pull runs at a time; a pull requested while another is outstanding is
//! skipped.

pub mod client;

pub use client::{quotes_from_posts, ServerPost, SyncClient};

use crate::quotes::{MergeStrategy, QuoteError, QuoteStore};
use crate::storage::settings::AppSettings;
use crate::types::quote::Quote;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Banner text shown after an automatic sync
pub const SYNC_NOTIFICATION: &str = "Quotes synced with server!";

/// Sync errors
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Allows one operation in flight at a time
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

/// Held while an operation is in flight; releases the slot on drop
#[derive(Debug)]
pub struct FlightPermit {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, `None` if it is taken
    pub fn try_begin(&self) -> Option<FlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightPermit {
                busy: self.busy.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Result of a pull attempt
#[derive(Debug)]
pub enum PullOutcome {
    Fetched(Vec<Quote>),
    /// Another pull was still running
    Skipped,
}

/// What started a sync
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SyncTrigger {
    /// The periodic timer
    Timer,
    /// The "Load from Server" button
    Manual,
}

impl SyncTrigger {
    /// Merge strategy configured for this kind of sync
    pub fn merge_strategy(self, settings: &AppSettings) -> MergeStrategy {
        match self {
            SyncTrigger::Timer => settings.timer_merge,
            SyncTrigger::Manual => settings.manual_merge,
        }
    }
}

/// What the UI should do after pulled quotes were merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncApplied {
    pub added: usize,
    /// Show the sync banner
    pub notify: bool,
    /// Pick a new quote for the display
    pub repick: bool,
}

/// Merge pulled quotes into `store` with the strategy for `trigger`
///
/// Only timer syncs announce themselves. The display is re-picked when it was
/// showing a placeholder, since the list may no longer be empty.
pub fn apply_pulled(
    store: &mut QuoteStore,
    quotes: Vec<Quote>,
    trigger: SyncTrigger,
    settings: &AppSettings,
    showing_placeholder: bool,
) -> Result<SyncApplied, QuoteError> {
    let added = store.merge_remote(quotes, trigger.merge_strategy(settings))?;
    tracing::info!("Synced {} quotes from server ({:?})", added, trigger);

    Ok(SyncApplied {
        added,
        notify: trigger == SyncTrigger::Timer,
        repick: showing_placeholder,
    })
}

/// Fetch server quotes unless a pull is already running
pub async fn pull(client: &SyncClient, flight: &SingleFlight) -> Result<PullOutcome, SyncError> {
    let Some(_permit) = flight.try_begin() else {
        tracing::debug!("Sync already in progress, skipping");
        return Ok(PullOutcome::Skipped);
    };

    let quotes = client.fetch_quotes().await?;
    Ok(PullOutcome::Fetched(quotes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::settings::AppSettings;

    #[test]
    fn test_single_flight_permit() {
        let flight = SingleFlight::new();
        assert!(!flight.is_busy());

        let permit = flight.try_begin().expect("slot should be free");
        assert!(flight.is_busy());
        assert!(flight.try_begin().is_none());

        // Clones share the slot
        assert!(flight.clone().try_begin().is_none());

        drop(permit);
        assert!(!flight.is_busy());
        assert!(flight.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_pull_skips_while_busy() {
        let mut settings = AppSettings::default();
        // Never contacted: the pull is skipped before any request
        settings.server_url = "http://127.0.0.1:9/posts".to_string();
        let client = SyncClient::new(&settings).unwrap();
        let flight = SingleFlight::new();

        let _permit = flight.try_begin().unwrap();
        let outcome = pull(&client, &flight).await.unwrap();
        assert!(matches!(outcome, PullOutcome::Skipped));
    }

    #[tokio::test]
    async fn test_failed_pull_releases_slot() {
        let mut settings = AppSettings::default();
        settings.server_url = "http://127.0.0.1:9/posts".to_string();
        settings.request_timeout_secs = 1;
        let client = SyncClient::new(&settings).unwrap();
        let flight = SingleFlight::new();

        assert!(pull(&client, &flight).await.is_err());
        assert!(!flight.is_busy());
    }

    #[test]
    fn test_merge_strategy_per_trigger() {
        let mut settings = AppSettings::default();
        assert_eq!(
            SyncTrigger::Timer.merge_strategy(&settings),
            MergeStrategy::Prepend
        );
        assert_eq!(
            SyncTrigger::Manual.merge_strategy(&settings),
            MergeStrategy::Append
        );

        settings.timer_merge = MergeStrategy::DedupeByContent;
        assert_eq!(
            SyncTrigger::Timer.merge_strategy(&settings),
            MergeStrategy::DedupeByContent
        );
    }

    fn server_quotes() -> Vec<Quote> {
        vec![Quote::from_server("first"), Quote::from_server("second")]
    }

    #[test]
    fn test_timer_sync_prepends_and_notifies() {
        let mut store = QuoteStore::in_memory();
        let settings = AppSettings::default();
        let before = store.len();

        let applied =
            apply_pulled(&mut store, server_quotes(), SyncTrigger::Timer, &settings, false)
                .unwrap();

        assert_eq!(
            applied,
            SyncApplied {
                added: 2,
                notify: true,
                repick: false
            }
        );
        assert_eq!(store.len(), before + 2);
        assert_eq!(store.quotes()[0], Quote::from_server("first"));
        assert_eq!(store.quotes()[1], Quote::from_server("second"));
    }

    #[test]
    fn test_manual_sync_appends_quietly() {
        let mut store = QuoteStore::in_memory();
        let settings = AppSettings::default();

        let applied =
            apply_pulled(&mut store, server_quotes(), SyncTrigger::Manual, &settings, false)
                .unwrap();

        assert!(!applied.notify);
        assert!(!applied.repick);
        assert_eq!(store.quotes().last(), Some(&Quote::from_server("second")));
    }

    #[test]
    fn test_sync_repicks_over_placeholder() {
        let mut store = QuoteStore::in_memory();
        store.clear().unwrap();
        let settings = AppSettings::default();

        let applied =
            apply_pulled(&mut store, server_quotes(), SyncTrigger::Manual, &settings, true)
                .unwrap();

        assert!(applied.repick);
        assert_eq!(store.len(), 2);
    }
}
