//! Shopping basket model.
//!
//! Lines reference catalog products by id; prices are always read back from
//! the catalog so a stale session can never carry a stale price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hive_image_core::ProductId;

use crate::catalog::Catalog;

/// A single basket line: product id plus quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The shopping basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Basket lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the basket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a product. An existing line for the same product is merged by
    /// incrementing its quantity.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity,
            });
        }
    }

    /// Change a line's quantity by a signed delta. The result is floored at
    /// 1: a basket line can only disappear through [`Cart::remove`].
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            let current = i64::from(line.quantity);
            let updated = current.saturating_add(i64::from(delta)).max(1);
            line.quantity = u32::try_from(updated).unwrap_or(1);
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Subtotal: Σ price × quantity over lines that still resolve against
    /// the catalog. Lines referencing unknown products contribute nothing.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Decimal {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog
                    .get(line.product_id)
                    .map(|product| product.price * Decimal::from(line.quantity))
            })
            .sum()
    }
}
