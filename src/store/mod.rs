//! # Quote Store
//!
//! The injected store capability set consumed by the service layer, plus an
//! in-memory implementation so the whole system runs without an external
//! database. The service layer only ever sees the [`QuoteStore`] trait.

mod filter;
mod memory;
mod page;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::QueryOptions;

pub use filter::{is_non_empty_str, QuoteFilter};
pub use memory::MemoryQuoteStore;
pub use page::PageResult;

/// Field name for distinct genre lookups
pub const QUOTE_GENRE_FIELD: &str = "quoteGenre";

/// Field name for distinct author lookups
pub const QUOTE_AUTHOR_FIELD: &str = "quoteAuthor";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer failures.
///
/// The service layer re-wraps these wholesale; only the message survives
/// past the service boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A query could not be executed
    #[error("{0}")]
    Query(String),

    /// The backing store is not usable
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Handle for a pending filtered lookup
#[derive(Debug, Clone)]
pub struct FindQuery {
    pub filter: QuoteFilter,
}

/// Handle for a pending aggregation pipeline
#[derive(Debug, Clone)]
pub struct AggregateQuery {
    pub filter: QuoteFilter,
    pub sample_size: Option<u64>,
}

impl AggregateQuery {
    /// Bound the pipeline to a random sample of at most `n` documents
    pub fn sample(mut self, n: u64) -> Self {
        self.sample_size = Some(n);
        self
    }
}

/// Document-count capability.
///
/// Split out of [`QuoteStore`] so an already-obtained counting source can be
/// passed to the service independently of the default store.
#[async_trait]
pub trait DocumentCount: Send + Sync {
    /// Approximate number of documents in the collection
    async fn estimated_document_count(&self) -> StoreResult<u64>;
}

/// The store capability set.
///
/// One asynchronous call per operation; pagination, sampling, and filter
/// matching semantics all live behind this trait.
#[async_trait]
pub trait QuoteStore: DocumentCount {
    /// Begin a filtered lookup
    fn find(&self, filter: QuoteFilter) -> FindQuery {
        FindQuery { filter }
    }

    /// Begin an aggregation pipeline over the filtered collection
    fn aggregate(&self, filter: QuoteFilter) -> AggregateQuery {
        AggregateQuery {
            filter,
            sample_size: None,
        }
    }

    /// Execute a filtered lookup, returning one page of results
    async fn paginate(&self, query: FindQuery, options: &QueryOptions) -> StoreResult<PageResult>;

    /// Execute an aggregation pipeline, returning one page of results
    async fn aggregate_paginate(
        &self,
        query: AggregateQuery,
        options: &QueryOptions,
    ) -> StoreResult<PageResult>;

    /// Distinct values of the named field across the whole collection
    async fn distinct(&self, field: &str) -> StoreResult<Vec<String>>;
}
