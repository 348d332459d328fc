//! Image upload route handler.

use axum::{Json, extract::Multipart, extract::State};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Accept a multipart `image` part, push it to the image host, and return
/// the hosted URL for the admin form to store on the product.
///
/// A failed upload is retryable; it never mutates catalog state.
#[instrument(skip(state, multipart))]
pub async fn image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("image part needs a file name".to_string()))?
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read image part: {e}")))?;

        let url = state.imgbb().upload(&file_name, bytes.to_vec()).await?;
        tracing::info!(%url, "image uploaded");
        return Ok(Json(json!({ "url": url })));
    }

    Err(AppError::Validation("image file is required".to_string()))
}
