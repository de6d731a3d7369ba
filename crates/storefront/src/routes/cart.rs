//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The whole basket lives in the session; prices are always resolved against
//! the catalog at render time.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hive_image_core::ProductId;

use crate::catalog::{Catalog, Product};
use crate::delivery;
use crate::error::Result;
use crate::filters;
use crate::models::Cart;
use crate::models::session::keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product: &'static Product,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub delivery_cost: Decimal,
    pub total: Decimal,
    pub vat: Decimal,
    pub free_delivery_progress: u32,
    pub free_delivery_remaining: Decimal,
}

impl CartView {
    /// Join basket lines against the catalog and compute the totals block.
    /// Lines that no longer resolve are skipped.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &'static Catalog) -> Self {
        let items: Vec<CartItemView> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(line.product_id).map(|product| CartItemView {
                    product,
                    quantity: line.quantity,
                    line_total: product.price * Decimal::from(line.quantity),
                })
            })
            .collect();

        let subtotal = cart.subtotal(catalog);
        let delivery_cost = delivery::standard_delivery_cost(subtotal);
        let total = subtotal + delivery_cost;

        Self {
            items,
            item_count: cart.item_count(),
            subtotal,
            delivery_cost,
            total,
            vat: delivery::vat_included(total),
            free_delivery_progress: delivery::free_delivery_progress(subtotal),
            free_delivery_remaining: delivery::free_delivery_remaining(subtotal),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Get the cart from the session, empty if absent.
pub async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session.get(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
}

/// Update cart form data. `delta` is signed: `-1` for the minus button,
/// `1` for the plus button.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let cart = get_cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::build(&cart, state.catalog()),
    })
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line for the same product. Returns the cart
/// count badge plus an HTMX trigger so other fragments refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    if state.catalog().get(product_id).is_none() {
        return Err(crate::error::AppError::NotFound(format!(
            "product {}",
            form.product_id
        )));
    }

    let mut cart = get_cart(&session).await?;
    cart.add(product_id, form.quantity.unwrap_or(1).max(1));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Update cart line quantity by a delta (HTMX).
///
/// The quantity is floored at 1; removal happens only through
/// [`remove`].
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut cart = get_cart(&session).await?;
    cart.update_quantity(ProductId::new(form.product_id), form.delta);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, state.catalog()),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = get_cart(&session).await?;
    cart.remove(ProductId::new(form.product_id));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, state.catalog()),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = get_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_cart_view_totals() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(4), 1); // 89.99, below the free threshold
        let view = CartView::build(&cart, &CATALOG);

        assert_eq!(view.subtotal, Decimal::new(8_999, 2));
        assert_eq!(view.delivery_cost, delivery::STANDARD_DELIVERY_COST);
        assert_eq!(view.total, Decimal::new(9_498, 2));
        assert_eq!(view.free_delivery_remaining, Decimal::new(1_001, 2));
        assert_eq!(view.free_delivery_progress, 90);
    }

    #[test]
    fn test_cart_view_free_delivery_over_threshold() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(1), 1); // 999.00
        let view = CartView::build(&cart, &CATALOG);

        assert_eq!(view.delivery_cost, Decimal::ZERO);
        assert_eq!(view.total, view.subtotal);
        assert_eq!(view.free_delivery_progress, 100);
    }

    #[test]
    fn test_cart_view_skips_unknown_products() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(999), 2);
        let view = CartView::build(&cart, &CATALOG);
        assert!(view.is_empty());
        assert_eq!(view.subtotal, Decimal::ZERO);
    }
}
