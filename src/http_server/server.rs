//! # HTTP Server
//!
//! Combines the health and query routers behind CORS and request tracing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::ApiHandler;
use crate::observability::Event;

use super::auth::{require_api_key, ApiKeys};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::query_routes::query_routes;

/// HTTP server for natural-language queries
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a request handler
    pub fn new(config: HttpServerConfig, handler: Arc<ApiHandler>) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: Arc<ApiHandler>) -> Router {
        let keys = ApiKeys::new(config.api_keys.iter().cloned());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let protected = query_routes(handler).route_layer(from_fn_with_state(keys, require_api_key));

        Router::new()
            .merge(health_routes())
            .merge(protected)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(event = %Event::ServerStart, %addr, "serving");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
