//! # HTTP Server
//!
//! Server assembly: configuration, CORS, health route, and the serving loop
//! over the API router.

mod config;
mod server;

pub use config::HttpServerConfig;
pub use server::ApiServer;
