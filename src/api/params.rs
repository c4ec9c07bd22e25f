//! # Query Parameter Parsing
//!
//! Boundary-layer parsing of the raw query string into typed parameters.
//! Defaulting lives here, not in the service: absent or empty `page`/`limit`
//! fall back to `{page: 1, limit: 10}`; values that are present but not a
//! positive integer are rejected with `BadRequest`. A literal `0` is a real
//! (invalid) value, never "absent".

use std::collections::HashMap;

use crate::model::{QueryOptions, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::store::is_non_empty_str;

use super::errors::{ApiError, ApiResult};

/// Default sample size for random-quote requests
pub const DEFAULT_COUNT: u64 = 1;

/// Parameters for filtered list queries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub author: String,
    pub genre: String,
    pub text: String,
    pub options: QueryOptions,
}

impl ListQuery {
    /// Parse from the raw query-string map
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        Ok(Self {
            author: text_param(params, "author"),
            genre: text_param(params, "genre"),
            text: text_param(params, "query"),
            options: parse_options(params)?,
        })
    }
}

/// Parameters for random-sample queries
#[derive(Debug, Clone, PartialEq)]
pub struct RandomQuery {
    pub list: ListQuery,
    pub count: u64,
}

impl RandomQuery {
    /// Parse from the raw query-string map
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        Ok(Self {
            list: ListQuery::parse(params)?,
            count: positive_param(params, "count", DEFAULT_COUNT)?,
        })
    }
}

fn parse_options(params: &HashMap<String, String>) -> ApiResult<QueryOptions> {
    Ok(QueryOptions {
        page: positive_param(params, "page", DEFAULT_PAGE)?,
        limit: positive_param(params, "limit", DEFAULT_LIMIT)?,
    })
}

/// Free-text filter field; absent and empty are equivalent
fn text_param(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

/// Positive-integer field with a fallback for absent/empty values
fn positive_param(params: &HashMap<String, String>, key: &str, fallback: u64) -> ApiResult<u64> {
    let raw = match params.get(key) {
        Some(value) if is_non_empty_str(value) => value.trim(),
        _ => return Ok(fallback),
    };

    match raw.parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::BadRequest(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}
