//! Catalog entry types and validated write payloads.
//!
//! `Product` is serialized camelCase so it matches the on-disk catalog
//! document and the JSON API wire format. The write payloads (`ProductDraft`,
//! `ProductPatch`) are strict: unknown fields are rejected at the boundary
//! instead of being silently dropped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProductId;

/// Validation failures for product write payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyName,

    #[error("price must be greater than 0")]
    NonPositivePrice,

    #[error("image must be a valid URL: {0}")]
    InvalidImageUrl(String),

    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, immutable once created.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price; invariant: strictly positive.
    pub price: Decimal,
    pub category: String,
    /// Hosted image URL, possibly empty.
    pub image: String,
    /// Times shoppers saved this product to a wishlist.
    #[serde(default)]
    pub likes: u64,
    /// Times this product went through checkout.
    #[serde(default)]
    pub orders: u64,
    pub created_at: DateTime<Utc>,
    /// Stamped on the first successful update, absent before that.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload for a new product.
///
/// `name` and `price` are required; everything else defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl ProductDraft {
    /// Validate the draft and build a full `Product` with a fresh id.
    ///
    /// Defaults: empty description, `"Uncategorized"` category, empty image.
    /// A whitespace-only category is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty, the price is not
    /// strictly positive, or the image is a non-empty string that does not
    /// parse as a URL.
    pub fn into_product(self, now: DateTime<Utc>) -> Result<Product, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }

        let image = self.image.unwrap_or_default();
        validate_image_url(&image)?;

        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string());

        Ok(Product {
            id: ProductId::generate(),
            name: self.name,
            description: self.description.unwrap_or_default(),
            price: self.price,
            category,
            image,
            likes: 0,
            orders: 0,
            created_at: now,
            updated_at: None,
        })
    }
}

/// Partial update payload; omitted fields retain their previous values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    /// Apply the patch to an existing product and stamp `updated_at`.
    ///
    /// An empty name or category is treated as "keep the previous value";
    /// description and image accept the empty string as an explicit value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a provided price is not strictly
    /// positive or a provided non-empty image does not parse as a URL.
    pub fn apply(self, product: &mut Product, now: DateTime<Utc>) -> Result<(), ValidationError> {
        if let Some(price) = self.price {
            if price <= Decimal::ZERO {
                return Err(ValidationError::NonPositivePrice);
            }
            product.price = price;
        }
        if let Some(image) = self.image {
            validate_image_url(&image)?;
            product.image = image;
        }
        if let Some(name) = self.name.filter(|n| !n.trim().is_empty()) {
            product.name = name;
        }
        if let Some(category) = self.category.filter(|c| !c.trim().is_empty()) {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        product.updated_at = Some(now);
        Ok(())
    }
}

/// A product selected for purchase, with quantity.
///
/// Cart items are copies of the catalog snapshot at the time the shopper
/// acted; later catalog edits do not propagate here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of the full line: unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// A product saved to the wishlist; membership is a set keyed by id.
pub type WishlistItem = Product;

/// Check a possibly-empty image field; empty means "no image".
fn validate_image_url(image: &str) -> Result<(), ValidationError> {
    if image.is_empty() {
        return Ok(());
    }
    url::Url::parse(image)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidImageUrl(image.to_string()))
}
