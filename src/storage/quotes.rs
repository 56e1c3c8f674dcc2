//! Quote persistence
//!
//! Reads and writes the quote list and the selected category under their
//! storage keys.

use crate::storage::{KeyValueStore, StorageError};
use crate::types::quote::Quote;

/// Key holding the JSON array of quotes
pub const QUOTES_KEY: &str = "quotes";
/// Key holding the selected category as a plain string
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
/// Key holding the raw text of an unreadable quote list
pub const CORRUPT_QUOTES_KEY: &str = "quotes.corrupt";

/// Result of reading the persisted quote list
#[derive(Debug)]
pub enum QuotesLoad {
    /// A valid list was found
    Loaded(Vec<Quote>),
    /// Nothing has been persisted yet
    Missing,
    /// Something was persisted but it is not a quote list
    Corrupt { raw: String, error: String },
}

/// Read the persisted quote list
///
/// Only backend failures are errors; unreadable content is reported as
/// [`QuotesLoad::Corrupt`] so the caller can pick a fallback.
pub fn load_quotes(store: &dyn KeyValueStore) -> Result<QuotesLoad, StorageError> {
    let Some(raw) = store.get(QUOTES_KEY)? else {
        return Ok(QuotesLoad::Missing);
    };

    match serde_json::from_str::<Vec<Quote>>(&raw) {
        Ok(quotes) => {
            tracing::debug!("Loaded {} quotes from storage", quotes.len());
            Ok(QuotesLoad::Loaded(quotes))
        }
        Err(e) => Ok(QuotesLoad::Corrupt {
            raw,
            error: e.to_string(),
        }),
    }
}

/// Persist the quote list
pub fn save_quotes(store: &dyn KeyValueStore, quotes: &[Quote]) -> Result<(), StorageError> {
    let json = serde_json::to_string(quotes)?;
    store.set(QUOTES_KEY, &json)
}

/// Keep unreadable quote data around instead of overwriting it silently
pub fn backup_corrupt_quotes(store: &dyn KeyValueStore, raw: &str) -> Result<(), StorageError> {
    store.set(CORRUPT_QUOTES_KEY, raw)
}

/// Read the selected category, `None` if never saved
pub fn load_selected_category(store: &dyn KeyValueStore) -> Result<Option<String>, StorageError> {
    store.get(SELECTED_CATEGORY_KEY)
}

/// Persist the selected category
pub fn save_selected_category(store: &dyn KeyValueStore, category: &str) -> Result<(), StorageError> {
    store.set(SELECTED_CATEGORY_KEY, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        assert!(matches!(load_quotes(&store).unwrap(), QuotesLoad::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let quotes = vec![Quote::new("A", "B"), Quote::new("C", "D")];
        save_quotes(&store, &quotes).unwrap();

        match load_quotes(&store).unwrap() {
            QuotesLoad::Loaded(loaded) => assert_eq!(loaded, quotes),
            other => panic!("expected loaded quotes, got {:?}", other),
        }
    }

    #[test]
    fn test_load_corrupt() {
        let store = MemoryStore::new();
        store.set(QUOTES_KEY, "{not json").unwrap();

        match load_quotes(&store).unwrap() {
            QuotesLoad::Corrupt { raw, error } => {
                assert_eq!(raw, "{not json");
                assert!(!error.is_empty());
            }
            other => panic!("expected corrupt data, got {:?}", other),
        }
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let store = MemoryStore::new();
        store.set(QUOTES_KEY, r#"{"text":"A"}"#).unwrap();
        assert!(matches!(
            load_quotes(&store).unwrap(),
            QuotesLoad::Corrupt { .. }
        ));
    }

    #[test]
    fn test_selected_category_is_plain_text() {
        let store = MemoryStore::new();
        assert_eq!(load_selected_category(&store).unwrap(), None);

        save_selected_category(&store, "Wisdom").unwrap();
        assert_eq!(store.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("Wisdom"));
        assert_eq!(
            load_selected_category(&store).unwrap().as_deref(),
            Some("Wisdom")
        );
    }
}
