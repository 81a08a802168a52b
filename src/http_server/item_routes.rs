//! Item HTTP routes
//!
//! Endpoints for items scoped to a list. Every handler resolves the list by
//! name first, so a missing list reports 404 even when the item name is also
//! absent.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::store::{Item, List};
use crate::validation::validate_name;

use super::errors::ApiResult;
use super::{AppState, MessageResponse};

/// Body of the item update endpoint
#[derive(Debug, Deserialize)]
pub struct ItemUpdate {
    pub is_in_cart: bool,
}

/// Create the item routes
pub fn item_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists/{list_name}/items/", get(read_items_handler))
        .route(
            "/lists/{list_name}/items/{item_name}",
            post(create_item_handler),
        )
        .route(
            "/lists/{list_name}/items/{item_name}",
            get(get_item_handler),
        )
        .route(
            "/lists/{list_name}/items/{item_name}",
            put(update_item_handler),
        )
        .route(
            "/lists/{list_name}/items/{item_name}",
            delete(delete_item_handler),
        )
        .with_state(state)
}

/// Resolve the owning list, mapping absence to 404 before any item lookup.
fn resolve_list(state: &AppState, list_name: &str) -> ApiResult<List> {
    Ok(state.store.find_list(list_name).inspect_err(|_| {
        tracing::warn!("List not found: {}", list_name);
    })?)
}

/// `GET /lists/{list_name}/items/` - names of all items in the list.
async fn read_items_handler(
    State(state): State<Arc<AppState>>,
    Path(list_name): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    tracing::info!("Reading items from list: {}", list_name);
    let list = resolve_list(&state, &list_name)?;
    let items = state.store.items_in_list(list.id)?;
    tracing::debug!("Found {} items in list '{}'", items.len(), list_name);
    Ok(Json(items.into_iter().map(|i| i.name).collect()))
}

/// `POST /lists/{list_name}/items/{item_name}` - create an item in a list.
async fn create_item_handler(
    State(state): State<Arc<AppState>>,
    Path((list_name, item_name)): Path<(String, String)>,
) -> ApiResult<Json<Item>> {
    tracing::info!("Creating item '{}' in list: {}", item_name, list_name);
    validate_name(&item_name)?;
    let list = resolve_list(&state, &list_name)?;
    let item = state.store.create_item(list.id, &item_name).inspect_err(|e| {
        tracing::warn!(
            "Failed to create item '{}' in list '{}': {}",
            item_name,
            list_name,
            e
        );
    })?;
    tracing::info!(
        "Successfully created item '{}' in list '{}' with id: {}",
        item_name,
        list_name,
        item.id
    );
    Ok(Json(item))
}

/// `GET /lists/{list_name}/items/{item_name}` - a single item representation.
async fn get_item_handler(
    State(state): State<Arc<AppState>>,
    Path((list_name, item_name)): Path<(String, String)>,
) -> ApiResult<Json<Item>> {
    tracing::info!("Reading item '{}' from list: {}", item_name, list_name);
    let list = resolve_list(&state, &list_name)?;
    let item = state.store.find_item(list.id, &item_name)?;
    Ok(Json(item))
}

/// `PUT /lists/{list_name}/items/{item_name}` - set the in-cart flag.
async fn update_item_handler(
    State(state): State<Arc<AppState>>,
    Path((list_name, item_name)): Path<(String, String)>,
    Json(update): Json<ItemUpdate>,
) -> ApiResult<Json<Item>> {
    tracing::info!(
        "Updating item '{}' in list '{}': is_in_cart={}",
        item_name,
        list_name,
        update.is_in_cart
    );
    let list = resolve_list(&state, &list_name)?;
    let item = state
        .store
        .set_in_cart(list.id, &item_name, update.is_in_cart)?;
    Ok(Json(item))
}

/// `DELETE /lists/{list_name}/items/{item_name}` - delete a single item.
async fn delete_item_handler(
    State(state): State<Arc<AppState>>,
    Path((list_name, item_name)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!("Deleting item '{}' from list: {}", item_name, list_name);
    let list = resolve_list(&state, &list_name)?;
    state.store.delete_item(list.id, &item_name).inspect_err(|e| {
        tracing::warn!(
            "Failed to delete item '{}' from list '{}': {}",
            item_name,
            list_name,
            e
        );
    })?;
    tracing::info!(
        "Successfully deleted item '{}' from list '{}'",
        item_name,
        list_name
    );
    Ok(Json(MessageResponse {
        message: format!(
            "Item '{}' deleted successfully from list '{}'",
            item_name, list_name
        ),
    }))
}
