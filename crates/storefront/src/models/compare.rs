//! Bounded side-by-side comparison set.

use serde::{Deserialize, Serialize};

use hive_image_core::ProductId;

/// Maximum number of products that can be compared side by side.
pub const MAX_COMPARE_PRODUCTS: usize = 3;

/// Result of toggling a product's membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Added,
    Removed,
    /// The set already holds [`MAX_COMPARE_PRODUCTS`] products.
    Rejected,
}

/// The visitor's comparison set, capped at [`MAX_COMPARE_PRODUCTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    product_ids: Vec<ProductId>,
}

impl ComparisonSet {
    /// Member ids in insertion order.
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

    /// Toggle membership. Adding a fourth product is rejected.
    pub fn toggle(&mut self, product_id: ProductId) -> CompareOutcome {
        if self.contains(product_id) {
            self.remove(product_id);
            return CompareOutcome::Removed;
        }
        if self.product_ids.len() >= MAX_COMPARE_PRODUCTS {
            return CompareOutcome::Rejected;
        }
        self.product_ids.push(product_id);
        CompareOutcome::Added
    }

    /// Remove one product.
    pub fn remove(&mut self, product_id: ProductId) {
        self.product_ids.retain(|&id| id != product_id);
    }

    /// Remove all products.
    pub fn clear(&mut self) {
        self.product_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = ComparisonSet::default();
        assert_eq!(set.toggle(ProductId::new(1)), CompareOutcome::Added);
        assert!(set.contains(ProductId::new(1)));
        assert_eq!(set.toggle(ProductId::new(1)), CompareOutcome::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_fourth_product_is_rejected() {
        let mut set = ComparisonSet::default();
        for id in 1..=3 {
            assert_eq!(set.toggle(ProductId::new(id)), CompareOutcome::Added);
        }
        assert_eq!(set.toggle(ProductId::new(4)), CompareOutcome::Rejected);
        assert_eq!(set.len(), MAX_COMPARE_PRODUCTS);
    }

    #[test]
    fn test_toggle_of_member_works_even_when_full() {
        let mut set = ComparisonSet::default();
        for id in 1..=3 {
            set.toggle(ProductId::new(id));
        }
        assert_eq!(set.toggle(ProductId::new(2)), CompareOutcome::Removed);
        assert_eq!(set.len(), 2);
        // And there is room again
        assert_eq!(set.toggle(ProductId::new(5)), CompareOutcome::Added);
    }

    #[test]
    fn test_clear() {
        let mut set = ComparisonSet::default();
        set.toggle(ProductId::new(1));
        set.toggle(ProductId::new(2));
        set.clear();
        assert!(set.is_empty());
    }
}
