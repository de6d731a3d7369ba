//! Simulated checkout route handlers.
//!
//! Payment always succeeds after a fixed processing delay; no payment
//! details are validated or stored. Exactly one order is recorded per
//! submission. A "buy now" checkout bypasses the basket entirely and
//! leaves it untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hive_image_core::ProductId;

use crate::delivery::{DeliveryEstimate, DeliveryMethod, PLATINUM_DELIVERY_COST};
use crate::error::Result;
use crate::filters;
use crate::models::session::keys;
use crate::models::{Cart, CartLine, Order};
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Simulated payment processing delay.
const PAYMENT_PROCESSING_DELAY_MS: u64 = 2_500;

/// Checkout page query parameters.
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    /// Product id for a direct "buy now" checkout, bypassing the basket.
    pub buy_now: Option<i32>,
    /// Unit count for the direct checkout (default 1).
    pub quantity: Option<u32>,
}

/// Checkout form data. Payment fields submitted by the card form are
/// accepted and discarded.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub delivery: DeliveryMethod,
    #[serde(default)]
    pub buy_now: bool,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub cart: CartView,
    pub estimate: DeliveryEstimate,
    pub platinum_cost: rust_decimal::Decimal,
    /// What the visitor pays if they pick platinum delivery instead.
    pub platinum_total: rust_decimal::Decimal,
    pub buy_now: bool,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate {
    pub order: Order,
}

/// Read the basket the checkout operates on: either the pending buy-now
/// line or the session cart.
async fn checkout_cart(session: &Session, buy_now: bool) -> Result<Cart> {
    if buy_now {
        let line: Option<CartLine> = session.get(keys::BUY_NOW).await?;
        let mut cart = Cart::default();
        if let Some(line) = line {
            cart.add(line.product_id, line.quantity);
        }
        return Ok(cart);
    }
    crate::routes::cart::get_cart(session).await
}

/// Display the checkout page.
///
/// With `?buy_now=<id>` a direct checkout is staged in the session; the
/// basket is not touched. Without it any stale buy-now line is discarded
/// and the basket is checked out.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CheckoutQuery>,
) -> Result<Response> {
    let buy_now = match query.buy_now {
        Some(id) => {
            let product_id = ProductId::new(id);
            if state.catalog().get(product_id).is_none() {
                return Err(crate::error::AppError::NotFound(format!("product {id}")));
            }
            session
                .insert(
                    keys::BUY_NOW,
                    CartLine {
                        product_id,
                        quantity: query.quantity.unwrap_or(1).max(1),
                    },
                )
                .await?;
            true
        }
        None => {
            session.remove::<CartLine>(keys::BUY_NOW).await?;
            false
        }
    };

    let cart = checkout_cart(&session, buy_now).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let view = CartView::build(&cart, state.catalog());
    let platinum_total = view.subtotal + PLATINUM_DELIVERY_COST;
    Ok(CheckoutShowTemplate {
        cart: view,
        estimate: DeliveryEstimate::from_order_time(Utc::now().naive_utc()),
        platinum_cost: PLATINUM_DELIVERY_COST,
        platinum_total,
        buy_now,
    }
    .into_response())
}

/// Process a checkout submission.
///
/// Simulates the payment gateway with a fixed delay, then records exactly
/// one order and redirects to the confirmation page. A basket checkout
/// empties the basket; a buy-now checkout leaves it untouched.
#[instrument(skip(state, session))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let catalog = state.catalog();
    let cart = checkout_cart(&session, form.buy_now).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    // Simulated payment gateway: always succeeds after the delay
    tokio::time::sleep(std::time::Duration::from_millis(PAYMENT_PROCESSING_DELAY_MS)).await;

    let subtotal = cart.subtotal(catalog);
    let total = subtotal + form.delivery.cost(subtotal);
    let order = Order::from_cart(&cart, catalog, total, Utc::now());

    let mut orders: Vec<Order> = session.get(keys::ORDERS).await?.unwrap_or_default();
    orders.insert(0, order.clone());
    session.insert(keys::ORDERS, &orders).await?;

    tracing::info!(reference = %order.reference, %total, "order placed");

    if form.buy_now {
        session.remove::<CartLine>(keys::BUY_NOW).await?;
    } else {
        crate::routes::cart::save_cart(&session, &Cart::default()).await?;
    }

    Ok(Redirect::to("/checkout/success").into_response())
}

/// Display the order confirmation page for the most recent order.
#[instrument(skip(session))]
pub async fn success(session: Session) -> Result<Response> {
    let orders: Vec<Order> = session.get(keys::ORDERS).await?.unwrap_or_default();
    let Some(order) = orders.into_iter().next() else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(CheckoutSuccessTemplate { order }.into_response())
}
