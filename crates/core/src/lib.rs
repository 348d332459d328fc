//! Souk Core - Shared types and client-side store logic.
//!
//! This crate provides the pieces used across Souk components:
//! - `server` - Catalog API and admin CRUD surface
//! - Storefront clients embedding the cart/wishlist stores
//!
//! # Architecture
//!
//! The core crate contains domain types and the shopper-local state machines
//! (cart, wishlist, order formatting). It performs no HTTP and holds no
//! server state; snapshot persistence goes through the [`store::SnapshotStore`]
//! seam so callers choose the backend (in-memory for tests, a directory on
//! disk for durable sessions).
//!
//! # Modules
//!
//! - [`types`] - Product catalog types and validated write payloads
//! - [`store`] - Cart and wishlist stores with optimistic local persistence
//! - [`order`] - WhatsApp order message formatting and deep links

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order;
pub mod store;
pub mod types;

pub use types::*;
