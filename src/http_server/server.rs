//! Server assembly and serving loop.

use std::io;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::routes::api_routes;
use crate::api::ApiError;
use crate::observability::Logger;
use crate::service::QuoteService;
use crate::store::QuoteStore;

use super::config::HttpServerConfig;

/// The assembled quotes API server
pub struct ApiServer {
    config: HttpServerConfig,
    router: Router,
}

impl ApiServer {
    /// Assemble the server from config and an injected store
    pub fn new<S: QuoteStore + 'static>(config: HttpServerConfig, store: Arc<S>) -> Self {
        let service = QuoteService::new(store);
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the router: API routes, health route, CORS
    fn build_router<S: QuoteStore + 'static>(
        config: &HttpServerConfig,
        service: QuoteService<S>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parse_origins(&config.cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(api_routes(service))
            .fallback(not_found_handler)
            .layer(cors)
    }

    /// The router, for in-process testing without a listener
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind and serve until the process exits
    pub async fn serve(self) -> io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info("SERVER_START", &[("addr", &addr)]);
        axum::serve(listener, self.router).await
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Parse configured CORS origins, warning on any that are dropped
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", s)]);
                None
            }
        })
        .collect()
}

/// Unknown routes flow through the same error contract as everything else
async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
