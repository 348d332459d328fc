//! Checkout handoff: turn cart contents into a WhatsApp deep link.
//!
//! The server holds no cart state; the client posts its item sequence and
//! receives the formatted order summary plus the `wa.me` link addressed to
//! the configured seller number. The total is recomputed here rather than
//! trusted from the client.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use souk_core::order;
use souk_core::types::CartItem;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Checkout payload: the client's cart item sequence.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
}

/// Generated order summary and messaging deep link.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub url: String,
}

/// Produce the order message and WhatsApp link for the posted cart.
#[instrument(skip(state, request), fields(items = request.items.len()))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    if request.items.is_empty() {
        return Err(AppError::Validation("cart is empty".to_string()));
    }
    if request.items.iter().any(|item| item.quantity == 0) {
        return Err(AppError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }

    let total = request.items.iter().map(CartItem::line_price).sum();
    let message = order::order_message(&request.items, total);
    let url = order::whatsapp_url(&state.config().seller_phone, &message);

    Ok(Json(CheckoutResponse { message, url }))
}
