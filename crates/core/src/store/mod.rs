//! Shopper-local state: cart and wishlist stores.
//!
//! Both stores keep their working state in memory and mirror every mutation
//! to a [`SnapshotStore`] backend so state survives a reload. Persistence is
//! optimistic: a backend failure is logged and the in-memory mutation stands.
//!
//! Stores are owned objects with an explicit lifecycle - created once per
//! shopper session, hydrated from the persisted snapshot if one exists, and
//! dropped on session end. The backend is injected so tests run against
//! [`MemorySnapshots`] and production sessions against [`DirSnapshots`].

pub mod cart;
pub mod snapshot;
pub mod wishlist;

pub use cart::CartStore;
pub use snapshot::{DirSnapshots, MemorySnapshots, SnapshotError, SnapshotStore};
pub use wishlist::{LikeSink, NoopLikeSink, WishlistStore};

/// Snapshot key for the cart item sequence.
pub const CART_SNAPSHOT_KEY: &str = "cart";

/// Snapshot key for the wishlist item sequence.
pub const WISHLIST_SNAPSHOT_KEY: &str = "wishlist";
