//! Unified error handling for the API surface.
//!
//! Every handler returns `Result<T, AppError>`; internal failures are
//! normalized to one of four kinds before they reach the client, and 5xx
//! detail (paths, io errors) is only ever logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::RepositoryError;
use crate::services::imgbb::UploadError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid field in a request payload.
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Catalog operation failed.
    #[error("catalog error: {0}")]
    Repository(#[from] RepositoryError),

    /// An external collaborator (image host) failed.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidFile(message) => Self::Validation(message),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Persistence failures carry io detail that must not reach clients.
        if matches!(
            self,
            Self::Repository(RepositoryError::Io(_) | RepositoryError::Serialize(_))
        ) {
            tracing::error!(error = %self, "request error");
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(err) => match err {
                RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
                RepositoryError::Validation(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Io(_) | RepositoryError::Serialize(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let message = match &self {
            Self::Validation(message) => message.clone(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Repository(err) => match err {
                RepositoryError::NotFound(_) => "Product not found".to_string(),
                RepositoryError::Validation(err) => err.to_string(),
                RepositoryError::Io(_) | RepositoryError::Serialize(_) => {
                    "Internal server error".to_string()
                }
            },
            Self::Upstream(message) => message.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
