//! # Route Handlers
//!
//! The controllers: parse boundary parameters, call one service operation,
//! fold the result into the envelope. Success is always HTTP 200 with the
//! envelope as body; failures convert through `ApiError::into_response`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::model::Quote;
use crate::observability::Logger;
use crate::service::QuoteService;
use crate::store::QuoteStore;

use super::envelope::{build, Envelope, Pagination};
use super::errors::ApiError;
use super::params::{ListQuery, RandomQuery};

/// State shared across handlers
pub struct ApiState<S: QuoteStore> {
    pub service: QuoteService<S>,
}

type SharedState<S> = Arc<ApiState<S>>;

/// Build the API router over the given service
pub fn api_routes<S: QuoteStore + 'static>(service: QuoteService<S>) -> Router {
    let state = Arc::new(ApiState { service });

    Router::new()
        .route("/api/v3/quotes", get(all_quotes_handler::<S>))
        .route("/api/v3/quotes/random", get(random_quotes_handler::<S>))
        .route("/api/v3/quotes/count", get(quote_count_handler::<S>))
        .route("/api/v3/genres", get(all_genres_handler::<S>))
        .route("/api/v3/authors", get(all_authors_handler::<S>))
        .with_state(state)
}

/// Log a failed request before it surfaces as the uniform error body
fn observe_failure(operation: &'static str, err: ApiError) -> ApiError {
    Logger::error(
        "REQUEST_FAILED",
        &[
            ("operation", operation),
            ("code", err.status_code().as_str()),
            ("message", &err.to_string()),
        ],
    );
    err
}

async fn all_quotes_handler<S: QuoteStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Vec<Quote>>>, ApiError> {
    let params = ListQuery::parse(&raw)?;
    let page = state
        .service
        .get_all_quotes(&params.author, &params.genre, &params.text, &params.options)
        .await
        .map_err(|e| observe_failure("get_all_quotes", e))?;

    Ok(Json(Envelope::paginated("Quotes", page)))
}

async fn random_quotes_handler<S: QuoteStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Vec<Quote>>>, ApiError> {
    let params = RandomQuery::parse(&raw)?;
    let list = &params.list;
    let page = state
        .service
        .get_random(&list.author, &list.genre, &list.text, params.count, &list.options)
        .await
        .map_err(|e| observe_failure("get_random", e))?;

    Ok(Json(Envelope::paginated("Random quotes", page)))
}

async fn quote_count_handler<S: QuoteStore + 'static>(
    State(state): State<SharedState<S>>,
) -> Result<Json<Envelope<Vec<Quote>>>, ApiError> {
    let count = state
        .service
        .get_document_count(None)
        .await
        .map_err(|e| observe_failure("get_document_count", e))?;

    Ok(Json(build(
        200,
        "Total quotes",
        Pagination::NONE,
        Some(count),
        Vec::new(),
    )))
}

async fn all_genres_handler<S: QuoteStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let params = ListQuery::parse(&raw)?;
    let genres = state
        .service
        .get_all_genres(&params.options)
        .await
        .map_err(|e| observe_failure("get_all_genres", e))?;

    Ok(Json(Envelope::listing("Genres", genres)))
}

async fn all_authors_handler<S: QuoteStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let params = ListQuery::parse(&raw)?;
    let authors = state
        .service
        .get_all_authors(&params.options)
        .await
        .map_err(|e| observe_failure("get_all_authors", e))?;

    Ok(Json(Envelope::listing("Authors", authors)))
}
