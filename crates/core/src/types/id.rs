//! Newtype ID for type-safe product references.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix for generated product identifiers.
const PRODUCT_ID_PREFIX: &str = "prod_";

/// Number of hex characters of the UUID kept in a generated id.
const PRODUCT_ID_SUFFIX_LEN: usize = 8;

/// Type-safe product identifier.
///
/// Catalog ids are short human-visible slugs (`prod_` plus an 8-character
/// random suffix), assigned once at creation time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an existing id value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a fresh unique id with a short random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        let suffix: String = uuid.chars().take(PRODUCT_ID_SUFFIX_LEN).collect();
        Self(format!("{PRODUCT_ID_PREFIX}{suffix}"))
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
