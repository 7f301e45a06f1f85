//! # HTTP Server
//!
//! Combines the health and library routers, adds request tracing and CORS,
//! and serves them with axum.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::routes::library_routes;
use crate::error::AppError;
use crate::library::Library;

/// HTTP server for the library API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and an empty library
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty library
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_library(config, Arc::new(Library::new()))
    }

    /// Create a new HTTP server over an existing library
    pub fn with_library(config: HttpServerConfig, library: Arc<Library>) -> Self {
        let router = build_router(&config, library);
        Self { config, router }
    }

    /// Configured `host:port`
    pub fn listen_addr(&self) -> String {
        self.config.listen_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.bind_addr().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid listen address '{}': {}", self.config.listen_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "library API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router
pub fn build_router(config: &HttpServerConfig, library: Arc<Library>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(library_routes(library))
        .fallback(not_found)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Permissive when no origins are configured
fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %s, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
