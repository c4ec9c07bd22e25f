//! In-memory quote store
//!
//! Backs the server in self-contained deployments and every test. Seeded
//! from a JSON array of quote records.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use rand::seq::index;

use crate::model::{Quote, QueryOptions};

use super::{
    AggregateQuery, DocumentCount, FindQuery, PageResult, QuoteFilter, StoreError, StoreResult,
    QUOTE_AUTHOR_FIELD, QUOTE_GENRE_FIELD,
};

/// In-memory implementation of the store capability set
pub struct MemoryQuoteStore {
    quotes: RwLock<Vec<Quote>>,
}

impl MemoryQuoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            quotes: RwLock::new(Vec::new()),
        }
    }

    /// Create a store seeded with the given quotes
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: RwLock::new(quotes),
        }
    }

    /// Seed a store from a JSON file holding an array of quote records
    pub fn load_from_file(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Unavailable(format!("failed to read {}: {}", path.display(), e)))?;

        let quotes: Vec<Quote> = serde_json::from_str(&content)
            .map_err(|e| StoreError::Query(format!("invalid seed JSON: {}", e)))?;

        Ok(Self::with_quotes(quotes))
    }

    /// Insert a quote (seeding and tests)
    pub fn insert(&self, quote: Quote) -> StoreResult<()> {
        self.write_guard()?.push(quote);
        Ok(())
    }

    fn read_guard(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Quote>>> {
        self.quotes
            .read()
            .map_err(|_| StoreError::Unavailable("quote collection lock poisoned".to_string()))
    }

    fn write_guard(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Quote>>> {
        self.quotes
            .write()
            .map_err(|_| StoreError::Unavailable("quote collection lock poisoned".to_string()))
    }

    fn matched(&self, query_filter: &QuoteFilter) -> StoreResult<Vec<Quote>> {
        let quotes = self.read_guard()?;
        Ok(quotes.iter().filter(|q| query_filter.matches(q)).cloned().collect())
    }
}

impl Default for MemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentCount for MemoryQuoteStore {
    async fn estimated_document_count(&self) -> StoreResult<u64> {
        Ok(self.read_guard()?.len() as u64)
    }
}

#[async_trait]
impl super::QuoteStore for MemoryQuoteStore {
    async fn paginate(&self, query: FindQuery, options: &QueryOptions) -> StoreResult<PageResult> {
        let matched = self.matched(&query.filter)?;
        Ok(PageResult::page_of(matched, options))
    }

    async fn aggregate_paginate(
        &self,
        query: AggregateQuery,
        options: &QueryOptions,
    ) -> StoreResult<PageResult> {
        let matched = self.matched(&query.filter)?;

        let sampled = match query.sample_size {
            Some(n) => {
                let amount = (n as usize).min(matched.len());
                let mut rng = rand::thread_rng();
                index::sample(&mut rng, matched.len(), amount)
                    .iter()
                    .map(|i| matched[i].clone())
                    .collect()
            }
            None => matched,
        };

        Ok(PageResult::page_of(sampled, options))
    }

    async fn distinct(&self, field: &str) -> StoreResult<Vec<String>> {
        let quotes = self.read_guard()?;

        let mut values: Vec<String> = match field {
            QUOTE_GENRE_FIELD => quotes.iter().map(|q| q.quote_genre.clone()).collect(),
            QUOTE_AUTHOR_FIELD => quotes.iter().map(|q| q.quote_author.clone()).collect(),
            other => {
                return Err(StoreError::Query(format!(
                    "unknown distinct field: {}",
                    other
                )))
            }
        };

        values.sort();
        values.dedup();
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{QuoteFilter, QuoteStore};
    use super::*;

    fn seeded() -> MemoryQuoteStore {
        MemoryQuoteStore::with_quotes(vec![
            Quote::new("Stay hungry", "Steve Jobs", "Inspiration"),
            Quote::new("To be or not to be", "Shakespeare", "Life"),
            Quote::new("Simplicity is the soul", "Shakespeare", "Wisdom"),
        ])
    }

    #[tokio::test]
    async fn test_paginate_filters_and_counts() {
        let store = seeded();
        let query = store.find(QuoteFilter::from_parts("shake", "", ""));
        let page = store.paginate(query, &QueryOptions::default()).await.unwrap();

        assert_eq!(page.total_docs, 2);
        assert_eq!(page.page, Some(1));
        assert!(page.docs.iter().all(|q| q.quote_author == "Shakespeare"));
    }

    #[tokio::test]
    async fn test_sample_bounds_result_size() {
        let store = seeded();
        let query = store.aggregate(QuoteFilter::default()).sample(2);
        let page = store
            .aggregate_paginate(query, &QueryOptions::new(1, 5))
            .await
            .unwrap();

        assert_eq!(page.docs.len(), 2);
        assert_eq!(page.total_docs, 2);
    }

    #[tokio::test]
    async fn test_sample_larger_than_collection_returns_everything() {
        let store = seeded();
        let query = store.aggregate(QuoteFilter::default()).sample(50);
        let page = store
            .aggregate_paginate(query, &QueryOptions::new(1, 50))
            .await
            .unwrap();

        assert_eq!(page.docs.len(), 3);
    }

    #[tokio::test]
    async fn test_distinct_genres_sorted_deduped() {
        let store = seeded();
        store
            .insert(Quote::new("Again", "Someone", "Life"))
            .unwrap();

        let genres = store.distinct(QUOTE_GENRE_FIELD).await.unwrap();
        assert_eq!(genres, vec!["Inspiration", "Life", "Wisdom"]);
    }

    #[tokio::test]
    async fn test_distinct_unknown_field_is_an_error() {
        let store = seeded();
        let err = store.distinct("quoteColor").await.unwrap_err();
        assert!(err.to_string().contains("quoteColor"));
    }

    #[tokio::test]
    async fn test_estimated_document_count() {
        let store = seeded();
        assert_eq!(store.estimated_document_count().await.unwrap(), 3);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let err = MemoryQuoteStore::load_from_file(Path::new("/no/such/quotes.json"));
        assert!(err.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        std::fs::write(
            &path,
            r#"[{"quoteText":"x","quoteAuthor":"a","quoteGenre":"g"}]"#,
        )
        .unwrap();

        let store = MemoryQuoteStore::load_from_file(&path).unwrap();
        let quotes = store.read_guard().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].quote_text, "x");
    }
}
