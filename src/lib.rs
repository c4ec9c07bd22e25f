//! quotegarden - a small quotes REST API
//!
//! Filtered paginated lookup, random sampling, distinct-value catalogs,
//! and a document count, normalized into one uniform response envelope
//! with a fixed error-to-status taxonomy.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
