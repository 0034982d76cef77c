//! Item handlers.
//!
//! These handlers run the shared operations from `picus_core::item` against
//! the repository in the application state.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use picus_core::item::{self, Item};
use serde_json::{json, Value};

use crate::{handlers::AppError, state::AppState};

/// List all items (GET /picus/list).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = item::list_items(state.items.as_ref()).await?;

    tracing::info!(count = items.len(), "Retrieved items");

    Ok(Json(items))
}

/// Create a new item from a JSON body (POST /picus/put).
///
/// The body is read as raw bytes so that a missing body or content type is
/// reported as "No data provided" rather than an extractor rejection.
pub async fn put_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = item::create_item(state.items.as_ref(), &body).await?;

    tracing::info!(item_id = %id, "Created item");

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// Get a single item by key (GET /picus/get/{key}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Item>, AppError> {
    let item = item::get_item(state.items.as_ref(), &key).await?;

    tracing::info!(item_id = %key, "Retrieved item");

    Ok(Json(item))
}
