//! # API Module
//!
//! The HTTP boundary: the uniform response envelope, the error taxonomy
//! with its status-code mapping, query-parameter parsing, and the route
//! handlers (controllers).

pub mod envelope;
pub mod errors;
pub mod params;
pub mod routes;

pub use envelope::{build, Envelope, Pagination};
pub use errors::{ApiError, ApiResult};
pub use params::{ListQuery, RandomQuery};
