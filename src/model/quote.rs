//! The quote record.
//!
//! Wire names follow the original collection schema (`_id`, `quoteText`,
//! `quoteAuthor`, `quoteGenre`) so existing clients keep working.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single quote document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Document id; minted when a seed record omits it
    #[serde(rename = "_id", default = "mint_id")]
    pub id: String,

    #[serde(rename = "quoteText")]
    pub quote_text: String,

    #[serde(rename = "quoteAuthor")]
    pub quote_author: String,

    #[serde(rename = "quoteGenre")]
    pub quote_genre: String,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

impl Quote {
    /// Create a quote with a fresh id and no timestamps
    pub fn new(
        quote_text: impl Into<String>,
        quote_author: impl Into<String>,
        quote_genre: impl Into<String>,
    ) -> Self {
        Self {
            id: mint_id(),
            quote_text: quote_text.into(),
            quote_author: quote_author.into(),
            quote_genre: quote_genre.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let quote = Quote::new("To be", "Shakespeare", "Life");
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["quoteText"], "To be");
        assert_eq!(json["quoteAuthor"], "Shakespeare");
        assert_eq!(json["quoteGenre"], "Life");
        assert!(json.get("_id").is_some());
        // Absent timestamps stay off the wire
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_seed_record_without_id_gets_one_minted() {
        let quote: Quote = serde_json::from_value(serde_json::json!({
            "quoteText": "x",
            "quoteAuthor": "a",
            "quoteGenre": "g",
        }))
        .unwrap();

        assert!(!quote.id.is_empty());
    }

    #[test]
    fn test_distinct_ids() {
        let a = Quote::new("x", "a", "g");
        let b = Quote::new("x", "a", "g");
        assert_ne!(a.id, b.id);
    }
}
