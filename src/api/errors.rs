//! # API Errors
//!
//! The error taxonomy exposed by the service boundary. Each variant pairs a
//! fixed HTTP status code with a human-readable message; nothing else
//! differs between variants. New variants extend the set by pairing a new
//! code with the same contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Caller-supplied arguments failed a precondition
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Base/default variant for uncategorized failures
    #[error("{0}")]
    General(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::General(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status code as a bare number
    pub fn get_code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

/// Store failures cross the service boundary exactly once, as General;
/// the original error's identity is dropped, its message preserved.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::General(err.to_string())
    }
}

/// Uniform error body emitted by the boundary handler
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            status: "error",
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}
