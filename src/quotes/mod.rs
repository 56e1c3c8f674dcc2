//! Quote store
//!
//! Owns the quote list and the selected category, and writes both through to
//! a [`KeyValueStore`] on every change.

pub mod filter;
pub mod merge;

pub use filter::{unique_categories, CategoryFilter, ALL_CATEGORIES};
pub use merge::MergeStrategy;

use crate::storage::quotes::{
    backup_corrupt_quotes, load_quotes, load_selected_category, save_quotes,
    save_selected_category, QuotesLoad,
};
use crate::storage::{KeyValueStore, MemoryStore, StorageError};
use crate::types::quote::{default_quotes, Quote};
use rand::Rng;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Shown when there is nothing to display at all
pub const NO_QUOTES_MESSAGE: &str = "No quotes available. Please add one!";
/// Shown when the selected category has no quotes
pub const NO_QUOTES_IN_CATEGORY_MESSAGE: &str = "No quotes available in this category.";

/// Errors from quote operations
///
/// The display text is what the user gets to see.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Please enter both a quote and a category.")]
    MissingFields,
    #[error("Invalid file format: expected a JSON array of quotes.")]
    NotAnArray,
    #[error("Error parsing JSON file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to save quotes: {0}")]
    Storage(#[from] StorageError),
}

/// What the quote display should show
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteView {
    Quote(Quote),
    Empty(&'static str),
}

/// Quote list plus selected category, backed by persistent storage
pub struct QuoteStore {
    quotes: Vec<Quote>,
    filter: CategoryFilter,
    backend: Arc<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Open the store, falling back to the default quotes when nothing usable
    /// is persisted
    ///
    /// Unreadable quote data is copied to a backup key before being replaced.
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let quotes = match load_quotes(backend.as_ref())? {
            QuotesLoad::Loaded(quotes) => quotes,
            QuotesLoad::Missing => {
                tracing::info!("No saved quotes, starting with defaults");
                default_quotes()
            }
            QuotesLoad::Corrupt { raw, error } => {
                tracing::warn!("Saved quotes are unreadable ({}), starting with defaults", error);
                backup_corrupt_quotes(backend.as_ref(), &raw)?;
                default_quotes()
            }
        };

        let filter = load_selected_category(backend.as_ref())?
            .map(|value| CategoryFilter::parse(&value))
            .unwrap_or_default();

        let mut store = Self {
            quotes,
            filter,
            backend,
        };
        store.reconcile_filter()?;
        Ok(store)
    }

    /// Store with the default quotes that keeps nothing across restarts
    pub fn in_memory() -> Self {
        Self {
            quotes: default_quotes(),
            filter: CategoryFilter::All,
            backend: Arc::new(MemoryStore::new()),
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Categories offered in the filter, in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        unique_categories(&self.quotes)
    }

    /// Quotes the display may currently pick from
    pub fn filtered(&self) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|quote| self.filter.matches(quote))
            .collect()
    }

    /// Pick a random quote from the filtered pool
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> QuoteView {
        if self.quotes.is_empty() {
            return QuoteView::Empty(NO_QUOTES_MESSAGE);
        }

        let pool = self.filtered();
        if pool.is_empty() {
            return QuoteView::Empty(NO_QUOTES_IN_CATEGORY_MESSAGE);
        }

        let index = rng.gen_range(0..pool.len());
        QuoteView::Quote(pool[index].clone())
    }

    /// Change and persist the selected category
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<(), QuoteError> {
        save_selected_category(self.backend.as_ref(), filter.as_str())?;
        tracing::debug!("Selected category: {}", filter);
        self.filter = filter;
        Ok(())
    }

    /// Append a quote from user input
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::MissingFields);
        }

        let quote = Quote::new(text, category);
        let mut quotes = self.quotes.clone();
        quotes.push(quote.clone());
        self.commit(quotes)?;

        tracing::info!("Added quote in category '{}'", quote.category);
        Ok(quote)
    }

    /// Replace the whole list with the quotes in `json`
    ///
    /// The top-level value must be an array; anything else leaves the list
    /// untouched. Each element must be a quote object. Missing `text` or
    /// `category` fields become empty strings, but non-object elements such
    /// as `[1, 2]` are rejected with [`QuoteError::Parse`].
    pub fn import_json(&mut self, json: &str) -> Result<usize, QuoteError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(QuoteError::NotAnArray);
        }

        let quotes: Vec<Quote> = serde_json::from_value(value)?;
        let count = quotes.len();
        self.commit(quotes)?;
        self.reconcile_filter()?;

        tracing::info!("Imported {} quotes", count);
        Ok(count)
    }

    /// Import quotes from a JSON file
    pub fn import_file(&mut self, path: &Path) -> Result<usize, QuoteError> {
        let json = fs::read_to_string(path)?;
        self.import_json(&json)
    }

    /// Pretty-printed JSON of the current list
    pub fn export_json(&self) -> Result<String, QuoteError> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    /// Write the current list to a JSON file
    pub fn export_file(&self, path: &Path) -> Result<(), QuoteError> {
        let json = self.export_json()?;
        fs::write(path, json)?;
        tracing::info!("Exported {} quotes to {:?}", self.quotes.len(), path);
        Ok(())
    }

    /// Remove every quote
    pub fn clear(&mut self) -> Result<(), QuoteError> {
        self.commit(Vec::new())?;
        self.reconcile_filter()?;
        tracing::info!("Cleared all quotes");
        Ok(())
    }

    /// Merge quotes fetched from the server, returning how many were added
    pub fn merge_remote(
        &mut self,
        remote: Vec<Quote>,
        strategy: MergeStrategy,
    ) -> Result<usize, QuoteError> {
        let mut quotes = self.quotes.clone();
        let added = strategy.apply(&mut quotes, remote);
        self.commit(quotes)?;

        tracing::debug!("Merged {} server quotes ({:?})", added, strategy);
        Ok(added)
    }

    /// Persist `quotes`, then make them current
    fn commit(&mut self, quotes: Vec<Quote>) -> Result<(), QuoteError> {
        save_quotes(self.backend.as_ref(), &quotes)?;
        self.quotes = quotes;
        Ok(())
    }

    /// Fall back to all categories when the selected one has no quotes left
    fn reconcile_filter(&mut self) -> Result<(), StorageError> {
        if let CategoryFilter::Only(category) = &self.filter {
            if !self.quotes.iter().any(|quote| &quote.category == category) {
                tracing::debug!("Category '{}' no longer exists, showing all", category);
                self.filter = CategoryFilter::All;
                save_selected_category(self.backend.as_ref(), self.filter.as_str())?;
            }
        }
        Ok(())
    }
}
