//! List HTTP routes
//!
//! Endpoints for creating, listing and deleting lists.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::store::List;
use crate::validation::validate_name;

use super::errors::ApiResult;
use super::{AppState, MessageResponse};

/// Create the list routes
pub fn list_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists/", get(read_lists_handler))
        // Same parameter name as the item routes; merged routers must agree
        // on the name at this position.
        .route("/lists/{list_name}", post(create_list_handler))
        .route("/lists/{list_name}", delete(delete_list_handler))
        .with_state(state)
}

/// `GET /lists/` - names of all lists, in insertion order.
async fn read_lists_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    tracing::info!("Reading all lists");
    let lists = state.store.all_lists()?;
    tracing::debug!("Found {} lists", lists.len());
    Ok(Json(lists.into_iter().map(|l| l.name).collect()))
}

/// `POST /lists/{name}` - create a list, returning its representation.
async fn create_list_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<List>> {
    tracing::info!("Creating list: {}", name);
    validate_name(&name)?;
    let list = state.store.create_list(&name).inspect_err(|e| {
        tracing::warn!("Failed to create list {}: {}", name, e);
    })?;
    tracing::info!("Successfully created list: {} with id: {}", name, list.id);
    Ok(Json(list))
}

/// `DELETE /lists/{name}` - delete a list and, by cascade, its items.
async fn delete_list_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!("Deleting list: {}", name);
    state.store.delete_list(&name).inspect_err(|e| {
        tracing::warn!("Failed to delete list {}: {}", name, e);
    })?;
    tracing::info!("Successfully deleted list: {}", name);
    Ok(Json(MessageResponse {
        message: format!("List '{}' deleted successfully", name),
    }))
}
