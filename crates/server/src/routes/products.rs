//! Product CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use souk_core::types::{Product, ProductDraft, ProductId, ProductPatch};

use crate::error::Result;
use crate::state::AppState;

/// List the full product collection.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.repository().list().await?;
    Ok(Json(products))
}

/// Fetch a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.repository().get(&ProductId::new(id)).await?;
    Ok(Json(product))
}

/// Create a product from a draft payload.
#[instrument(skip(state, draft), fields(name = %draft.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.repository().create(draft).await?;
    tracing::info!(id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to a product.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = state.repository().update(&ProductId::new(id), patch).await?;
    tracing::info!(id = %product.id, "product updated");
    Ok(Json(product))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = ProductId::new(id);
    state.repository().delete(&id).await?;
    tracing::info!(%id, "product deleted");
    Ok(Json(json!({ "success": true })))
}
