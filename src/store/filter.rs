//! Quote filter
//!
//! Combines author, genre, and free-text constraints with case-insensitive
//! partial-match semantics. Empty or absent fields impose no constraint.

use crate::model::Quote;

/// Explicit emptiness predicate.
///
/// Whitespace-only strings count as empty. Used instead of truthiness so a
/// literal `"0"` is still a real value.
pub fn is_non_empty_str(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Filter over the quote collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteFilter {
    /// Partial match against the author name
    pub author: Option<String>,

    /// Partial match against the genre
    pub genre: Option<String>,

    /// Partial match against the quote text
    pub text: Option<String>,
}

impl QuoteFilter {
    /// Build a filter from raw boundary strings, dropping empty fields
    pub fn from_parts(author: &str, genre: &str, text: &str) -> Self {
        let keep = |s: &str| is_non_empty_str(s).then(|| s.trim().to_string());
        Self {
            author: keep(author),
            genre: keep(genre),
            text: keep(text),
        }
    }

    /// True when no field imposes a constraint
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.genre.is_none() && self.text.is_none()
    }

    /// Case-insensitive partial match of all populated fields
    pub fn matches(&self, quote: &Quote) -> bool {
        contains_ci(&quote.quote_author, self.author.as_deref())
            && contains_ci(&quote.quote_genre, self.genre.as_deref())
            && contains_ci(&quote.quote_text, self.text.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote::new("Stay hungry, stay foolish", "Steve Jobs", "Inspiration")
    }

    #[test]
    fn test_is_non_empty_str() {
        assert!(is_non_empty_str("0"));
        assert!(is_non_empty_str("a"));
        assert!(!is_non_empty_str(""));
        assert!(!is_non_empty_str("   "));
    }

    #[test]
    fn test_empty_parts_impose_no_constraint() {
        let filter = QuoteFilter::from_parts("", "", "");
        assert!(filter.is_empty());
        assert!(filter.matches(&quote()));
    }

    #[test]
    fn test_case_insensitive_partial_match() {
        let filter = QuoteFilter::from_parts("steve", "", "");
        assert!(filter.matches(&quote()));

        let filter = QuoteFilter::from_parts("", "INSPIR", "hungry");
        assert!(filter.matches(&quote()));
    }

    #[test]
    fn test_all_fields_must_match() {
        let filter = QuoteFilter::from_parts("steve", "Life", "");
        assert!(!filter.matches(&quote()));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let filter = QuoteFilter::from_parts("  steve  ", "", "");
        assert_eq!(filter.author.as_deref(), Some("steve"));
    }
}
