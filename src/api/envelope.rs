//! # Response Envelope
//!
//! Every successful response, whatever its origin (paginated lookup, random
//! sample, distinct-value list, document count), is folded into one uniform
//! envelope. The builder copies its inputs through verbatim; it never
//! validates or defaults anything. All runtime policing is the caller's job.

use serde::Serialize;

use crate::model::Quote;
use crate::store::PageResult;

/// The pagination triple.
///
/// Always serialized as all three fields; null for non-paginated queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub total_pages: Option<u64>,
}

impl Pagination {
    /// The all-null triple used for simple list queries
    pub const NONE: Pagination = Pagination {
        current_page: None,
        next_page: None,
        total_pages: None,
    };

    /// Lift the paging bookkeeping out of a store page
    pub fn of_page(page: &PageResult) -> Self {
        Self {
            current_page: page.page,
            next_page: page.next_page,
            total_pages: page.total_pages,
        }
    }
}

/// The uniform response envelope.
///
/// Invariant (held by the callers, not the builder): `pagination` and
/// `total_quotes` are either both populated or both null; `data` is always
/// present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub status_code: u16,
    pub message: String,
    pub pagination: Pagination,
    pub total_quotes: Option<u64>,
    pub data: T,
}

/// Build an envelope from its five parts, unchanged.
///
/// Pure and deterministic; no error conditions.
pub fn build<T: Serialize>(
    status_code: u16,
    message: impl Into<String>,
    pagination: Pagination,
    total_quotes: Option<u64>,
    data: T,
) -> Envelope<T> {
    Envelope {
        status_code,
        message: message.into(),
        pagination,
        total_quotes,
        data,
    }
}

impl Envelope<Vec<Quote>> {
    /// Envelope for a paginated page of quotes; consumes the page
    pub fn paginated(message: impl Into<String>, page: PageResult) -> Self {
        let pagination = Pagination::of_page(&page);
        build(200, message, pagination, Some(page.total_docs), page.docs)
    }
}

impl Envelope<Vec<String>> {
    /// Envelope for a distinct-value list; pagination and total stay null
    pub fn listing(message: impl Into<String>, values: Vec<String>) -> Self {
        build(200, message, Pagination::NONE, None, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quote, QueryOptions};

    #[test]
    fn test_build_copies_all_five_fields_through() {
        let pagination = Pagination {
            current_page: Some(2),
            next_page: Some(3),
            total_pages: Some(5),
        };
        let envelope = build(200, "Quotes", pagination, Some(10), vec!["a", "b"]);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.message, "Quotes");
        assert_eq!(envelope.pagination, pagination);
        assert_eq!(envelope.total_quotes, Some(10));
        assert_eq!(envelope.data, vec!["a", "b"]);
    }

    #[test]
    fn test_build_passes_null_triple_and_empty_data_unchanged() {
        let envelope = build(200, "msg", Pagination::NONE, None, Vec::<String>::new());

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json["pagination"],
            serde_json::json!({ "currentPage": null, "nextPage": null, "totalPages": null })
        );
        assert_eq!(json["totalQuotes"], serde_json::Value::Null);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_build_accepts_null_data() {
        let envelope = build(200, "msg", Pagination::NONE, Some(0), serde_json::Value::Null);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["totalQuotes"], 0);
    }

    #[test]
    fn test_paginated_envelope_mirrors_page() {
        let page = PageResult::page_of(
            vec![Quote::new("x", "a", "g")],
            &QueryOptions::new(1, 5),
        );
        let envelope = Envelope::paginated("Random quotes", page);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.pagination.current_page, Some(1));
        assert_eq!(envelope.total_quotes, Some(1));
        assert_eq!(envelope.data[0].quote_text, "x");
    }

    #[test]
    fn test_listing_envelope_has_null_pagination() {
        let envelope = Envelope::listing("Genres", vec!["Life".to_string()]);
        assert_eq!(envelope.pagination, Pagination::NONE);
        assert_eq!(envelope.total_quotes, None);
        assert_eq!(envelope.data, vec!["Life"]);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let envelope = build(200, "msg", Pagination::NONE, None, Vec::<String>::new());
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("statusCode").is_some());
        assert!(json.get("totalQuotes").is_some());
    }
}
