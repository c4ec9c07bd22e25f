//! Quote service
//!
//! One method per data-access operation. Store results pass through
//! unmodified; the controller folds them into the envelope. Failures are
//! never retried and never partially handled.

use std::sync::Arc;

use crate::api::errors::ApiResult;
use crate::model::QueryOptions;
use crate::store::{
    DocumentCount, PageResult, QuoteFilter, QuoteStore, QUOTE_AUTHOR_FIELD, QUOTE_GENRE_FIELD,
};

/// Service over an injected quote store
pub struct QuoteService<S: QuoteStore> {
    store: Arc<S>,
}

impl<S: QuoteStore> Clone for QuoteService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: QuoteStore> QuoteService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Random sample of at most `count` quotes matching the filter
    pub async fn get_random(
        &self,
        author: &str,
        genre: &str,
        query: &str,
        count: u64,
        options: &QueryOptions,
    ) -> ApiResult<PageResult> {
        let filter = QuoteFilter::from_parts(author, genre, query);
        let pipeline = self.store.aggregate(filter).sample(count);
        let page = self.store.aggregate_paginate(pipeline, options).await?;
        Ok(page)
    }

    /// One page of quotes matching the filter
    pub async fn get_all_quotes(
        &self,
        author: &str,
        genre: &str,
        query: &str,
        options: &QueryOptions,
    ) -> ApiResult<PageResult> {
        let filter = QuoteFilter::from_parts(author, genre, query);
        let find = self.store.find(filter);
        let page = self.store.paginate(find, options).await?;
        Ok(page)
    }

    /// Distinct genres, passed through without transformation
    pub async fn get_all_genres(&self, _options: &QueryOptions) -> ApiResult<Vec<String>> {
        let genres = self.store.distinct(QUOTE_GENRE_FIELD).await?;
        Ok(genres)
    }

    /// Distinct authors, passed through without transformation
    pub async fn get_all_authors(&self, _options: &QueryOptions) -> ApiResult<Vec<String>> {
        let authors = self.store.distinct(QUOTE_AUTHOR_FIELD).await?;
        Ok(authors)
    }

    /// Total document count.
    ///
    /// When `source` is supplied its count is read directly and the default
    /// store is never touched; an explicit reuse escape hatch, not a cache.
    pub async fn get_document_count(
        &self,
        source: Option<&dyn DocumentCount>,
    ) -> ApiResult<u64> {
        let count = match source {
            Some(doc) => doc.estimated_document_count().await?,
            None => self.store.estimated_document_count().await?,
        };
        Ok(count)
    }
}
