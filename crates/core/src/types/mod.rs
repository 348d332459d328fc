//! Core types for Souk.
//!
//! This module provides the catalog domain types and the validated payloads
//! accepted at the write boundary.

pub mod id;
pub mod product;

pub use id::ProductId;
pub use product::{CartItem, Product, ProductDraft, ProductPatch, ValidationError, WishlistItem};
