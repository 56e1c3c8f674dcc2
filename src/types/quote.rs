//! Quote types
//!
//! Defines the quote record and the seed list used on first start.

use serde::{Deserialize, Serialize};

/// Category assigned to quotes pulled from the sync server
pub const SERVER_CATEGORY: &str = "Server";

/// A single quote
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote itself
    #[serde(default)]
    pub text: String,
    /// Free-form category label
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote tagged as coming from the sync server
    pub fn from_server(text: impl Into<String>) -> Self {
        Self::new(text, SERVER_CATEGORY)
    }

    /// Text as shown in the display, wrapped in quotation marks
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.text)
    }

    /// Category line as shown under the quote
    pub fn display_category(&self) -> String {
        format!("Category: {}", self.category)
    }
}

/// Quotes used when nothing has been persisted yet
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new(
            "Success is not the key to happiness. Happiness is the key to success.",
            "Inspiration",
        ),
        Quote::new(
            "In the middle of every difficulty lies opportunity.",
            "Wisdom",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quotes() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].category, "Motivation");
        assert_eq!(quotes[2].category, "Wisdom");
    }

    #[test]
    fn test_display_lines() {
        let quote = Quote::new("Stay hungry.", "Wisdom");
        assert_eq!(quote.display_text(), "\"Stay hungry.\"");
        assert_eq!(quote.display_category(), "Category: Wisdom");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let quote: Quote = serde_json::from_str(r#"{"text":"only text"}"#).unwrap();
        assert_eq!(quote.text, "only text");
        assert_eq!(quote.category, "");
    }

    #[test]
    fn test_server_quote() {
        let quote = Quote::from_server("sunt aut facere");
        assert_eq!(quote.category, SERVER_CATEGORY);
    }
}
