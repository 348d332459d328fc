//! Test harness for driving the assembled Souk router in-process.
//!
//! Each test gets its own catalog document in a temp directory, so tests
//! are hermetic and run in parallel without touching a live server.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use souk_server::catalog::JsonCatalog;
use souk_server::config::ServerConfig;
use souk_server::state::AppState;

/// A fully assembled application over a throwaway catalog document.
pub struct TestApp {
    pub router: Router,
    /// Holds the temp directory alive for the duration of the test.
    _dir: tempfile::TempDir,
}

impl TestApp {
    /// Build an app over an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_file: dir.path().join("products.json"),
            seller_phone: "15551234567".to_string(),
            imgbb_api_key: None,
        };

        let catalog = Arc::new(JsonCatalog::new(config.data_file.clone()));
        let state = AppState::new(config, catalog);

        Self {
            router: souk_server::app(state),
            _dir: dir,
        }
    }

    /// Path of the catalog document backing this app.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self._dir.path().join("products.json")
    }

    /// Send a JSON request and return status plus parsed body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        self.send(request).await
    }

    /// Send a multipart upload with one file part named `image`.
    pub async fn request_image_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> (StatusCode, Value) {
        let boundary = "x-souk-upload";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/products/image")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    /// Create a product and return its JSON representation.
    pub async fn create_product(&self, name: &str, price: f64) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/products",
                Some(&serde_json::json!({ "name": name, "price": price })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
