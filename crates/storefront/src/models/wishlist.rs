//! Saved-items wishlist.

use serde::{Deserialize, Serialize};

use hive_image_core::ProductId;

/// Result of toggling a wishlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistOutcome {
    Added,
    Removed,
}

/// The visitor's wishlist: an ordered set of product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    product_ids: Vec<ProductId>,
}

impl Wishlist {
    /// Saved ids in insertion order.
    #[must_use]
    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.product_ids.contains(&product_id)
    }

    /// Toggle an entry. Add-then-remove restores the prior state.
    pub fn toggle(&mut self, product_id: ProductId) -> WishlistOutcome {
        if self.contains(product_id) {
            self.product_ids.retain(|&id| id != product_id);
            WishlistOutcome::Removed
        } else {
            self.product_ids.push(product_id);
            WishlistOutcome::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_reversible() {
        let mut wishlist = Wishlist::default();
        wishlist.toggle(ProductId::new(2));
        let before = wishlist.clone();

        wishlist.toggle(ProductId::new(5));
        wishlist.toggle(ProductId::new(5));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_toggle_outcomes() {
        let mut wishlist = Wishlist::default();
        assert_eq!(wishlist.toggle(ProductId::new(1)), WishlistOutcome::Added);
        assert_eq!(wishlist.toggle(ProductId::new(1)), WishlistOutcome::Removed);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut wishlist = Wishlist::default();
        wishlist.toggle(ProductId::new(3));
        wishlist.toggle(ProductId::new(1));
        assert_eq!(
            wishlist.product_ids(),
            &[ProductId::new(3), ProductId::new(1)]
        );
    }
}
