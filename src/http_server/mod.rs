//! HTTP layer
//!
//! Axum routers and handlers translating the REST surface under `/api/v1`
//! into store calls. Handlers are stateless; all shared state is the store
//! handle inside [`AppState`].

pub mod config;
pub mod errors;
mod item_routes;
mod list_routes;
mod server;

use serde::Serialize;

use crate::store::Store;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use item_routes::item_routes;
pub use list_routes::list_routes;
pub use server::HttpServer;

/// State shared across request handlers
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Confirmation body returned by the delete endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
