//! Order records written by the simulated checkout.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hive_image_core::{OrderRef, OrderStatus, ProductId};

use crate::catalog::Catalog;
use crate::models::cart::Cart;

/// A denormalised order line. Name and unit price are copied at order time
/// so later catalog changes cannot rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// A recorded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub reference: OrderRef,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl Order {
    /// Build an order from basket lines and the final charged total.
    ///
    /// Lines that no longer resolve against the catalog are dropped, the
    /// same way the cart subtotal ignores them.
    #[must_use]
    pub fn from_cart(cart: &Cart, catalog: &Catalog, total: Decimal, placed_at: DateTime<Utc>) -> Self {
        let lines = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(line.product_id).map(|product| OrderLine {
                    product_id: product.id,
                    name: product.name.to_string(),
                    unit_price: product.price,
                    quantity: line.quantity,
                })
            })
            .collect();

        Self {
            reference: new_order_ref(),
            placed_at,
            lines,
            total,
            status: OrderStatus::Processing,
        }
    }

    /// Date formatted for the order history, e.g. "27 Aug 2026".
    #[must_use]
    pub fn date_display(&self) -> String {
        self.placed_at.format("%-d %b %Y").to_string()
    }
}

/// Generate a fresh customer-facing order reference.
fn new_order_ref() -> OrderRef {
    let number: u32 = rand::rng().random_range(100_000..=999_999);
    // The range above matches the validated reference range exactly.
    OrderRef::from_number(number)
        .unwrap_or_else(|_| OrderRef::from_number(100_000).expect("100000 is in range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_order_ref_shape() {
        let reference = new_order_ref();
        assert!(OrderRef::parse(reference.as_str()).is_ok());
    }

    #[test]
    fn test_from_cart_denormalises_lines() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(1), 2);
        let total = Decimal::new(199_800, 2);
        let order = Order::from_cart(&cart, &CATALOG, total, Utc::now());

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total, total);
        assert_eq!(order.lines.len(), 1);
        let line = order.lines.first().expect("one line");
        assert_eq!(line.name, "HivePhone Pro Max");
        assert_eq!(line.unit_price, Decimal::new(99_900, 2));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_from_cart_drops_unknown_products() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(999), 1);
        let order = Order::from_cart(&cart, &CATALOG, Decimal::ZERO, Utc::now());
        assert!(order.lines.is_empty());
    }

    #[test]
    fn test_date_display() {
        let placed_at = "2026-08-27T09:30:00Z".parse().expect("valid timestamp");
        let order = Order {
            reference: OrderRef::from_number(123_456).expect("valid"),
            placed_at,
            lines: Vec::new(),
            total: Decimal::ZERO,
            status: OrderStatus::Processing,
        };
        assert_eq!(order.date_display(), "27 Aug 2026");
    }

    #[test]
    fn test_session_roundtrip() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(4), 1);
        let order = Order::from_cart(&cart, &CATALOG, Decimal::new(9_498, 2), Utc::now());
        let json = serde_json::to_string(&vec![order.clone()]).expect("serialize");
        let restored: Vec<Order> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, vec![order]);
    }
}
