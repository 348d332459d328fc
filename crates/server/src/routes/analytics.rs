//! Analytics route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use souk_core::types::{Product, ProductId};

use crate::analytics::AnalyticsSummary;
use crate::catalog::EventKind;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Event payload: `{ "productId": ..., "action": "like" | "order" }`.
///
/// Fields are optional here so missing values surface as a 400 with a
/// descriptive message instead of a bare deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEventRequest {
    pub product_id: Option<String>,
    pub action: Option<String>,
}

/// Dashboard summary: top products and collection size.
#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<Json<AnalyticsSummary>> {
    let summary = state.analytics().summary().await?;
    Ok(Json(summary))
}

/// Record a like or order event against a product.
#[instrument(skip(state))]
pub async fn record_event(
    State(state): State<AppState>,
    Json(request): Json<RecordEventRequest>,
) -> Result<Json<Product>> {
    let (Some(product_id), Some(action)) = (request.product_id, request.action) else {
        return Err(AppError::Validation(
            "Product ID and action are required".to_string(),
        ));
    };

    let kind = match action.as_str() {
        "like" => EventKind::Like,
        "order" => EventKind::Order,
        _ => {
            return Err(AppError::Validation(
                "Invalid action. Use \"like\" or \"order\"".to_string(),
            ));
        }
    };

    let product = state
        .analytics()
        .record_event(&ProductId::new(product_id), kind)
        .await?;
    Ok(Json(product))
}
