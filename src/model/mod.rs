//! # Domain Model
//!
//! The quote record and the paging options passed to the store.

mod quote;

pub use quote::Quote;

/// Default page number when the request does not supply one
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the request does not supply one
pub const DEFAULT_LIMIT: u64 = 10;

/// Paging options forwarded opaquely to the store.
///
/// Both fields are >= 1; positivity is enforced at the HTTP boundary,
/// never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub page: u64,
    pub limit: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryOptions {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Zero-based index of the first record on this page.
    ///
    /// Saturates rather than overflowing; a skip past the end of the
    /// collection yields an empty page downstream.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}
