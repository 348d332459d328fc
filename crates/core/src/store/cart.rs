//! Cart store: the shopper's in-progress selection.

use rust_decimal::Decimal;

use crate::store::{CART_SNAPSHOT_KEY, SnapshotStore};
use crate::types::{CartItem, Product, ProductId, ValidationError};

/// An ordered collection of cart items, unique by product id, mirrored to a
/// snapshot backend on every mutation.
///
/// Items keep insertion order for display. Adding a product that is already
/// in the cart accumulates its quantity instead of creating a second row.
pub struct CartStore<S: SnapshotStore> {
    items: Vec<CartItem>,
    snapshots: S,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Create a store hydrated from the backend's `"cart"` snapshot.
    ///
    /// A missing or malformed snapshot yields an empty cart.
    pub fn new(snapshots: S) -> Self {
        let items = snapshots
            .load(CART_SNAPSHOT_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding malformed cart snapshot");
                    None
                }
            })
            .unwrap_or_default();

        Self { items, snapshots }
    }

    /// Add `quantity` of `product`, accumulating onto an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidQuantity` for a zero quantity.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem { product, quantity });
        }

        self.persist();
        Ok(())
    }

    /// Remove the entry for `id`; no-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Set the quantity for `id`, clamped to at least 1; no-op if absent.
    ///
    /// A request for zero keeps the line at quantity 1; removal goes
    /// through [`CartStore::remove_item`] only.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            item.quantity = quantity.max(1);
            self.persist();
        }
    }

    /// Empty the cart and remove the persisted snapshot entirely.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.snapshots.remove(CART_SNAPSHOT_KEY) {
            tracing::warn!(error = %e, "failed to remove cart snapshot");
        }
    }

    /// Sum of `price * quantity` over all items.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_price).sum()
    }

    /// Sum of quantities (a quantity-3 entry counts as 3).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Current items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mirror the full item sequence to the backend, best-effort.
    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(e) = self.snapshots.save(CART_SNAPSHOT_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist cart snapshot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize cart snapshot"),
        }
    }
}
