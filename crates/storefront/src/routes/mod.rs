//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Shop listing (category/price/rating filters)
//! GET  /products/{id}          - Product detail (records recently viewed)
//! GET  /products/{id}/quick-view - Quick view fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update            - Change quantity by delta (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Wishlist
//! GET  /wishlist               - Wishlist page
//! POST /wishlist/toggle        - Toggle entry (returns heart button fragment)
//!
//! # Comparison (max 3 products)
//! GET  /compare                - Comparison page
//! GET  /compare/bar            - Comparison bar fragment
//! POST /compare/toggle         - Toggle membership (rejection carries message)
//! POST /compare/remove         - Remove one product
//! POST /compare/clear          - Empty the set
//!
//! # Checkout (simulated, always succeeds)
//! GET  /checkout               - Checkout page (?buy_now=<id> for direct buy)
//! POST /checkout               - Process payment after fixed delay, record order
//! GET  /checkout/success       - Order confirmation
//!
//! # Orders
//! GET  /orders                 - Order history, most recent first
//!
//! # Chat assistant
//! GET  /chat/messages          - Transcript fragment
//! POST /chat/send              - One chat turn (rate limited)
//!
//! # Content pages
//! GET  /pages/{slug}           - Markdown page (warranty, delivery, ...)
//! ```

pub mod cart;
pub mod chat;
pub mod checkout;
pub mod compare;
pub mod home;
pub mod orders;
pub mod pages;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::chat_rate_limiter;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/quick-view", get(products::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
}

/// Create the comparison routes router.
pub fn compare_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(compare::show))
        .route("/bar", get(compare::bar))
        .route("/toggle", post(compare::toggle))
        .route("/remove", post(compare::remove))
        .route("/clear", post(compare::clear))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::place))
        .route("/success", get(checkout::success))
}

/// Create the chat routes router. The send endpoint is rate limited since
/// every turn costs a Gemini call.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(chat::messages))
        .route("/send", post(chat::send).layer(chat_rate_limiter()))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Comparison routes
        .nest("/compare", compare_routes())
        // Checkout routes
        .nest("/checkout", checkout_routes())
        // Order history
        .route("/orders", get(orders::index))
        // Chat assistant
        .nest("/chat", chat_routes())
        // Markdown content pages
        .route("/pages/{slug}", get(pages::show))
}
