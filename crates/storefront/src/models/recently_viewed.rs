//! Recently-viewed product history.

use serde::{Deserialize, Serialize};

use hive_image_core::ProductId;

/// Maximum number of products remembered.
pub const MAX_RECENTLY_VIEWED: usize = 5;

/// Ordered history of viewed products, most recent first, deduplicated,
/// capped at [`MAX_RECENTLY_VIEWED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyViewed {
    product_ids: Vec<ProductId>,
}

impl RecentlyViewed {
    /// Ids, most recently viewed first.
    #[must_use]
    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Record a view: moves the id to the front and trims the tail.
    pub fn record(&mut self, product_id: ProductId) {
        self.product_ids.retain(|&id| id != product_id);
        self.product_ids.insert(0, product_id);
        self.product_ids.truncate(MAX_RECENTLY_VIEWED);
    }
}
