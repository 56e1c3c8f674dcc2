//! Root Dioxus application component
//!
//! This module contains the shared application state, the user actions that
//! mutate it, and the root App component that owns the periodic sync.

use crate::quotes::{CategoryFilter, QuoteStore, QuoteView};
use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::FileStore;
use crate::sync::{
    self, PullOutcome, SingleFlight, SyncApplied, SyncClient, SyncTrigger, SYNC_NOTIFICATION,
};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Transient message with a generation counter
///
/// Each `show` starts a new generation; `expire` only clears the message if
/// no newer one replaced it in the meantime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    generation: u64,
    message: Option<String>,
}

impl Notice {
    /// Display `message`, returning the generation to expire it with
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    /// Clear the message if it is still the one from `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub store: Signal<QuoteStore>,
    pub settings: Signal<AppSettings>,
    /// Quote (or placeholder) currently on screen
    pub view: Signal<QuoteView>,
    /// Blocking message waiting to be acknowledged
    pub alert: Signal<Option<String>>,
    /// Transient notification
    pub banner: Signal<Notice>,
    /// Clear confirmation dialog is open
    pub confirm_clear: Signal<bool>,
    pub sync_client: Option<Arc<SyncClient>>,
    pub sync_flight: SingleFlight,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let store = open_store();

        let sync_client = match SyncClient::new(&settings) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("Failed to create sync client, server sync disabled: {}", e);
                None
            }
        };

        let view = store.pick(&mut rand::thread_rng());
        tracing::info!("AppState initialized with {} quotes", store.len());

        Self {
            store: Signal::new(store),
            settings: Signal::new(settings),
            view: Signal::new(view),
            alert: Signal::new(None),
            banner: Signal::new(Notice::default()),
            confirm_clear: Signal::new(false),
            sync_client,
            sync_flight: SingleFlight::new(),
        }
    }

    /// Pick a new random quote for the display
    pub fn show_new_quote(&mut self) {
        let view = self.store.read().pick(&mut rand::thread_rng());
        self.view.set(view);
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert.set(Some(message.into()));
    }

    /// Add a quote from the form; returns whether it was accepted
    pub fn add_quote(&mut self, text: &str, category: &str) -> bool {
        let result = self.store.write().add(text, category);
        match result {
            Ok(quote) => {
                self.show_alert("New quote added successfully!");
                if self.settings.read().push_new_quotes {
                    if let Some(client) = self.sync_client.clone() {
                        spawn(async move {
                            if let Err(e) = client.push_quote(&quote).await {
                                tracing::error!("Failed to push quote to server: {}", e);
                            }
                        });
                    }
                }
                true
            }
            Err(e) => {
                tracing::debug!("Quote rejected: {}", e);
                self.show_alert(e.to_string());
                false
            }
        }
    }

    /// Apply a value from the category select
    pub fn select_category(&mut self, value: &str) {
        let result = self.store.write().set_filter(CategoryFilter::parse(value));
        if let Err(e) = result {
            tracing::error!("Failed to save selected category: {}", e);
        }
        self.show_new_quote();
    }

    /// Ask for a JSON file and replace the list with its quotes
    pub fn import_quotes(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            self.show_alert("No file selected.");
            return;
        };

        let result = self.store.write().import_file(&path);
        match result {
            Ok(count) => {
                tracing::info!("Quotes imported from {:?}", path);
                self.show_new_quote();
                self.show_alert(format!("{} quotes imported successfully!", count));
            }
            Err(e) => {
                tracing::error!("Failed to import quotes: {}", e);
                self.show_alert(e.to_string());
            }
        }
    }

    /// Ask where to save and write the list as JSON
    pub fn export_quotes(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(default_export_name())
            .save_file()
        else {
            return;
        };

        let result = self.store.read().export_file(&path);
        if let Err(e) = result {
            tracing::error!("Failed to export quotes: {}", e);
            self.show_alert(e.to_string());
        }
    }

    /// Remove every quote; only called once the user confirmed
    pub fn clear_quotes(&mut self) {
        self.confirm_clear.set(false);
        let result = self.store.write().clear();
        match result {
            Ok(()) => self.show_new_quote(),
            Err(e) => {
                tracing::error!("Failed to clear quotes: {}", e);
                self.show_alert(e.to_string());
            }
        }
    }

    /// Pull quotes from the server and merge them
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn sync_from_server(&mut self, trigger: SyncTrigger) {
        let Some(client) = self.sync_client.clone() else {
            return;
        };

        let quotes = match sync::pull(&client, &self.sync_flight).await {
            Ok(PullOutcome::Fetched(quotes)) => quotes,
            Ok(PullOutcome::Skipped) => return,
            Err(e) => {
                tracing::error!("Error syncing with server: {}", e);
                return;
            }
        };

        let showing_placeholder = matches!(*self.view.read(), QuoteView::Empty(_));
        let settings = self.settings.read().clone();
        let result = sync::apply_pulled(
            &mut self.store.write(),
            quotes,
            trigger,
            &settings,
            showing_placeholder,
        );

        match result {
            Ok(SyncApplied { repick, notify, .. }) => {
                if repick {
                    self.show_new_quote();
                }
                if notify {
                    self.notify(SYNC_NOTIFICATION);
                }
            }
            Err(e) => tracing::error!("Failed to save synced quotes: {}", e),
        }
    }

    /// Show the banner for the configured duration
    pub fn notify(&mut self, message: &str) {
        let generation = self.banner.write().show(message);

        let mut banner = self.banner;
        let visible_for = Duration::from_secs(self.settings.read().notification_secs);
        spawn(async move {
            tokio::time::sleep(visible_for).await;
            // A newer notification keeps its own timer
            banner.write().expire(generation);
        });
    }

    /// Sync on a fixed interval for the lifetime of the app
    pub async fn run_sync_loop(mut self) {
        let (auto_sync, interval_secs) = {
            let settings = self.settings.read();
            (settings.auto_sync, settings.sync_interval_secs)
        };
        if !auto_sync {
            tracing::info!("Automatic sync disabled");
            return;
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately; the first sync waits a full interval
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sync_from_server(SyncTrigger::Timer).await;
        }
    }
}

fn default_export_name() -> String {
    format!("quotes-{}.json", chrono::Local::now().format("%Y-%m-%d"))
}

/// Open the on-disk quote store, or an in-memory one if storage is unusable
fn open_store() -> QuoteStore {
    let backend = FileStore::open_default().unwrap_or_else(|e| {
        tracing::warn!("No data directory ({}), storing quotes next to the app", e);
        FileStore::new(PathBuf::from("./local_storage"))
    });

    match QuoteStore::open(Arc::new(backend)) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open quote storage, changes will not be saved: {}", e);
            QuoteStore::in_memory()
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    use_effect(move || {
        let app_state = app_state.clone();
        spawn(async move {
            app_state.run_sync_loop().await;
        });
    });

    rsx! {
        Layout {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_only_its_own_generation() {
        let mut notice = Notice::default();
        assert_eq!(notice.message(), None);

        let first = notice.show("Quotes synced with server!");
        let second = notice.show("Quotes synced with server!");
        assert_ne!(first, second);

        // The older timer fires while the newer banner is still up
        assert!(!notice.expire(first));
        assert_eq!(notice.message(), Some("Quotes synced with server!"));

        assert!(notice.expire(second));
        assert_eq!(notice.message(), None);
        assert!(!notice.expire(second));
    }

    #[test]
    fn test_default_export_name() {
        let name = default_export_name();
        assert!(name.starts_with("quotes-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "quotes-YYYY-MM-DD.json".len());
    }
}
