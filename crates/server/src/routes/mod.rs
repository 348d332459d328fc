//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (catalog readable)
//!
//! # Products (storefront reads, admin CRUD)
//! GET    /products              - Full product listing
//! POST   /products              - Create product (201)
//! GET    /products/{id}         - Single product
//! PUT    /products/{id}         - Partial update
//! DELETE /products/{id}         - Delete product
//! POST   /products/image        - Upload an image, returns hosted URL
//!
//! # Analytics
//! GET  /products/analytics      - mostLoved / mostOrdered / totalProducts
//! POST /products/analytics      - Record a like/order event
//!
//! # Checkout
//! POST /checkout                - WhatsApp order message + deep link
//! ```

pub mod analytics;
pub mod checkout;
pub mod products;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::services::imgbb::MAX_FILE_SIZE;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        // Static segments must be registered alongside the {id} matcher.
        .route(
            "/analytics",
            get(analytics::summary).post(analytics::record_event),
        )
        // Axum's default body limit (2 MB) is far below the image host's
        // cap; raise it so oversized files reach our own validation. The
        // extra megabyte covers multipart framing around a maximum file.
        .route(
            "/image",
            post(upload::image).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/checkout", post(checkout::checkout))
}
