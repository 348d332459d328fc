//! imgbb image host client.
//!
//! Product images are not stored locally; the admin panel uploads them to
//! imgbb and the catalog keeps only the hosted URL. An upload failure is a
//! retryable upstream error and never touches catalog state.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// imgbb upload endpoint.
const UPLOAD_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Maximum accepted file size (imgbb's own limit).
pub const MAX_FILE_SIZE: usize = 32 * 1024 * 1024;

/// Accepted image file extensions.
const VALID_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Image upload failures.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file was rejected before any network traffic.
    #[error("{0}")]
    InvalidFile(String),

    /// No API key is configured for the image host.
    #[error("image host is not configured")]
    NotConfigured,

    /// The HTTP request itself failed.
    #[error("image host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image host answered but refused the upload.
    #[error("image host rejected the upload: {0}")]
    Rejected(String),
}

/// Successful upload response body (subset).
#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: bool,
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Client for the imgbb upload API.
#[derive(Clone)]
pub struct ImgbbClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
}

impl ImgbbClient {
    /// Create a client; without an API key every upload fails upstream.
    #[must_use]
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Upload an image and return its hosted URL.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::InvalidFile` if the extension or size is
    /// rejected locally, `NotConfigured` without an API key, and `Request`/
    /// `Rejected` for transport or image-host failures.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, UploadError> {
        validate_image_file(file_name, bytes.len())?;

        let api_key = self.api_key.as_ref().ok_or(UploadError::NotConfigured)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("key", api_key.expose_secret().to_string())
            .part("image", part);

        let response = self
            .client
            .post(UPLOAD_ENDPOINT)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected(format!("HTTP {status}")));
        }

        let body: UploadResponse = response.json().await?;
        match body.data {
            Some(data) if body.success => Ok(data.url),
            _ => Err(UploadError::Rejected(
                "API returned success=false".to_string(),
            )),
        }
    }
}

/// Reject files the image host would refuse before sending any bytes.
fn validate_image_file(file_name: &str, size: usize) -> Result<(), UploadError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if VALID_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(UploadError::InvalidFile(format!(
                "Invalid file type. Allowed: {}",
                VALID_EXTENSIONS.join(", ")
            )));
        }
    }

    if size > MAX_FILE_SIZE {
        return Err(UploadError::InvalidFile(format!(
            "File size exceeds {}MB limit",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    Ok(())
}
