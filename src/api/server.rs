//! # HTTP Server
//!
//! Builds the router over a shared note service and serves it: CORS
//! from config, per-request tracing, TCP bind on the configured
//! address.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::NoteService;
use crate::store::MemoryNoteStore;

use super::config::ApiConfig;
use super::routes::{health_routes, notes_routes};

/// HTTP server for the notes API
pub struct ApiServer {
    config: ApiConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ApiConfig) -> Self {
        let service = NoteService::new(MemoryNoteStore::new());
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router(config: &ApiConfig, service: NoteService<MemoryNoteStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let mut origins = Vec::new();
            for origin in &config.cors_origins {
                match origin.parse() {
                    Ok(value) => origins.push(value),
                    Err(_) => tracing::warn!(%origin, "ignoring unparseable CORS origin"),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(notes_routes(service))
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

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {e}", self.config.socket_addr()),
            )
        })?;

        tracing::info!(%addr, "starting notes API server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}
