//! Product catalog persistence.
//!
//! The catalog is the sole source of truth for the server-side product
//! collection. Callers go through the [`ProductRepository`] trait so the
//! whole-document JSON store can be swapped for a transactional backend
//! without touching handlers.

mod json_file;

pub use json_file::JsonCatalog;

use async_trait::async_trait;
use thiserror::Error;

use souk_core::types::{Product, ProductDraft, ProductId, ProductPatch, ValidationError};

/// Which counter a recorded event increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Like,
    Order,
}

/// Catalog operation failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Referenced product id does not exist.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Write payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Underlying document could not be read or written.
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying document could not be serialized.
    #[error("catalog serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read/write access to the persisted product collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in collection order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Look up a single product.
    async fn get(&self, id: &ProductId) -> Result<Product, RepositoryError>;

    /// Validate a draft and append a new product with a fresh id.
    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;

    /// Apply a partial patch and stamp `updated_at`.
    async fn update(&self, id: &ProductId, patch: ProductPatch)
    -> Result<Product, RepositoryError>;

    /// Remove a product.
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;

    /// Increment the product's like or order counter by exactly one.
    async fn record_event(
        &self,
        id: &ProductId,
        kind: EventKind,
    ) -> Result<Product, RepositoryError>;
}
