//! One page of query results, as produced by the store.

use serde::Serialize;

use crate::model::{Quote, QueryOptions};

/// A single page of documents plus paging bookkeeping.
///
/// `page`, `total_pages`, and `next_page` are populated by paginated
/// queries; the service returns this record unmodified to the controller,
/// which folds it into the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageResult {
    pub docs: Vec<Quote>,
    pub total_docs: u64,
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
    pub next_page: Option<u64>,
}

impl PageResult {
    /// Slice one page out of an already-filtered document set
    pub fn page_of(matched: Vec<Quote>, options: &QueryOptions) -> Self {
        let total_docs = matched.len() as u64;
        let total_pages = (total_docs.div_ceil(options.limit)).max(1);

        let docs: Vec<Quote> = matched
            .into_iter()
            .skip(options.skip() as usize)
            .take(options.limit as usize)
            .collect();

        let next_page = if options.page < total_pages {
            Some(options.page + 1)
        } else {
            None
        };

        Self {
            docs,
            total_docs,
            page: Some(options.page),
            total_pages: Some(total_pages),
            next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(n: usize) -> Vec<Quote> {
        (0..n)
            .map(|i| Quote::new(format!("q{}", i), "a", "g"))
            .collect()
    }

    #[test]
    fn test_first_of_several_pages() {
        let page = PageResult::page_of(quotes(12), &QueryOptions::new(1, 5));
        assert_eq!(page.docs.len(), 5);
        assert_eq!(page.total_docs, 12);
        assert_eq!(page.page, Some(1));
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.next_page, Some(2));
    }

    #[test]
    fn test_last_page_is_short_and_has_no_next() {
        let page = PageResult::page_of(quotes(12), &QueryOptions::new(3, 5));
        assert_eq!(page.docs.len(), 2);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_empty_set_still_reports_one_page() {
        let page = PageResult::page_of(vec![], &QueryOptions::new(1, 10));
        assert!(page.docs.is_empty());
        assert_eq!(page.total_docs, 0);
        assert_eq!(page.total_pages, Some(1));
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PageResult::page_of(quotes(3), &QueryOptions::new(5, 10));
        assert!(page.docs.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_maximal_page_number_yields_empty_page_without_panicking() {
        let page = PageResult::page_of(quotes(3), &QueryOptions::new(u64::MAX, 10));
        assert!(page.docs.is_empty());
        assert_eq!(page.total_docs, 3);
        assert_eq!(page.next_page, None);
    }
}
