//! HTTP server
//!
//! Assembles the health, list and item routers under `/api/v1` and runs the
//! serve loop. The router can be taken out of the server for in-process
//! testing without binding a socket.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::{Store, StoreResult};

use super::config::HttpServerConfig;
use super::item_routes::item_routes;
use super::list_routes::list_routes;
use super::AppState;

/// HTTP server for the lists API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the database file named in the config.
    pub fn new(config: HttpServerConfig) -> StoreResult<Self> {
        let store = Store::open(&config.db_path)?;
        Ok(Self::with_store(config, store))
    }

    /// Create a server over an already-opened store.
    pub fn with_store(config: HttpServerConfig, store: Store) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Store) -> Router {
        let state = Arc::new(AppState::new(store));

        // Permissive CORS when no origins are configured (development)
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

        let api = Router::new()
            .merge(health_routes())
            .merge(list_routes(state.clone()))
            .merge(item_routes(state));

        Router::new()
            .nest("/api/v1", api)
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
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!("Starting eggs HTTP server on {}", addr);
        tracing::info!("API available at http://{}/api/v1", addr);
        tracing::info!("Health check: http://{}/api/v1/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check routes
fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// `GET /health` - liveness probe, touches no state.
async fn health_handler() -> Json<&'static str> {
    tracing::info!("Health check requested");
    Json("OK")
}
