//! Wishlist store: products the shopper saved for later.

use crate::store::{SnapshotStore, WISHLIST_SNAPSHOT_KEY};
use crate::types::{ProductId, WishlistItem};

/// Receiver for fire-and-forget "like" notifications.
///
/// The wishlist calls this on the first insert of a product so the catalog's
/// like counter can follow along. Implementations must not block and must
/// swallow their own failures; a dropped notification never affects the
/// wishlist mutation.
pub trait LikeSink {
    fn record_like(&self, id: &ProductId);
}

/// A sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLikeSink;

impl LikeSink for NoopLikeSink {
    fn record_like(&self, _id: &ProductId) {}
}

/// A set of saved products keyed by id, mirrored to a snapshot backend on
/// every mutation.
///
/// Structurally the cart store minus quantity: membership is set-like, so
/// adding an already-saved product is a no-op (and does not re-notify).
pub struct WishlistStore<S: SnapshotStore, L: LikeSink = NoopLikeSink> {
    items: Vec<WishlistItem>,
    snapshots: S,
    likes: L,
}

impl<S: SnapshotStore> WishlistStore<S, NoopLikeSink> {
    /// Create a store hydrated from the backend's `"wishlist"` snapshot,
    /// with like notifications disabled.
    pub fn new(snapshots: S) -> Self {
        Self::with_like_sink(snapshots, NoopLikeSink)
    }
}

impl<S: SnapshotStore, L: LikeSink> WishlistStore<S, L> {
    /// Create a store hydrated from the backend's `"wishlist"` snapshot.
    ///
    /// A missing or malformed snapshot yields an empty wishlist.
    pub fn with_like_sink(snapshots: S, likes: L) -> Self {
        let items = snapshots
            .load(WISHLIST_SNAPSHOT_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding malformed wishlist snapshot");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            items,
            snapshots,
            likes,
        }
    }

    /// Save `product`; no-op if already present.
    ///
    /// The first insert fires a like notification through the sink.
    pub fn add(&mut self, product: WishlistItem) {
        if self.contains(&product.id) {
            return;
        }
        self.likes.record_like(&product.id);
        self.items.push(product);
        self.persist();
    }

    /// Remove the entry for `id`; no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Count of distinct saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Empty the wishlist and remove the persisted snapshot entirely.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.snapshots.remove(WISHLIST_SNAPSHOT_KEY) {
            tracing::warn!(error = %e, "failed to remove wishlist snapshot");
        }
    }

    /// Mirror the full item sequence to the backend, best-effort.
    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(e) = self.snapshots.save(WISHLIST_SNAPSHOT_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist wishlist snapshot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize wishlist snapshot"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;

    use super::*;
    use crate::store::MemorySnapshots;
    use crate::types::{Product, ProductDraft};

    fn product(name: &str) -> Product {
        ProductDraft {
            name: name.to_string(),
            price: "10".parse().unwrap(),
            description: None,
            category: None,
            image: None,
        }
        .into_product(Utc::now())
        .unwrap()
    }

    /// Sink that records every notification it receives.
    #[derive(Default)]
    struct CountingSink {
        liked: RefCell<Vec<ProductId>>,
    }

    impl LikeSink for &CountingSink {
        fn record_like(&self, id: &ProductId) {
            self.liked.borrow_mut().push(id.clone());
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let sink = CountingSink::default();
        let mut wishlist = WishlistStore::with_like_sink(MemorySnapshots::new(), &sink);
        let lantern = product("Lantern");

        wishlist.add(lantern.clone());
        wishlist.add(lantern.clone());

        assert_eq!(wishlist.total_items(), 1);
        assert!(wishlist.contains(&lantern.id));
        // The like side effect fires once, not per attempt.
        assert_eq!(sink.liked.borrow().len(), 1);
        assert_eq!(sink.liked.borrow()[0], lantern.id);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut wishlist = WishlistStore::new(MemorySnapshots::new());
        let lantern = product("Lantern");
        let id = lantern.id.clone();

        wishlist.add(lantern);
        assert!(wishlist.contains(&id));

        wishlist.remove(&id);
        assert!(!wishlist.contains(&id));
        assert_eq!(wishlist.total_items(), 0);

        // Removing again is a no-op.
        wishlist.remove(&id);
    }

    #[test]
    fn test_reload_hydrates_from_snapshot() {
        let snapshots = MemorySnapshots::new();
        let lantern = product("Lantern");

        let mut wishlist = WishlistStore::new(snapshots);
        wishlist.add(lantern.clone());
        let WishlistStore { snapshots, .. } = wishlist;

        let reloaded = WishlistStore::new(snapshots);
        assert!(reloaded.contains(&lantern.id));
        assert_eq!(reloaded.total_items(), 1);
    }

    #[test]
    fn test_clear_removes_snapshot_entirely() {
        let mut wishlist = WishlistStore::new(MemorySnapshots::new());
        wishlist.add(product("Lantern"));
        wishlist.clear();

        assert_eq!(wishlist.total_items(), 0);
        let WishlistStore { snapshots, .. } = wishlist;
        assert!(snapshots.load(WISHLIST_SNAPSHOT_KEY).is_none());
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_empty() {
        let snapshots = MemorySnapshots::new();
        snapshots.save(WISHLIST_SNAPSHOT_KEY, "[[[").unwrap();

        let wishlist = WishlistStore::new(snapshots);
        assert_eq!(wishlist.total_items(), 0);
    }
}
