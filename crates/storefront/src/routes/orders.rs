//! Order history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::Order;
use crate::models::session::keys;

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    /// Orders, most recent first.
    pub orders: Vec<Order>,
}

/// Display the order history, most recent first.
#[instrument(skip(session))]
pub async fn index(session: Session) -> Result<impl IntoResponse> {
    let orders: Vec<Order> = session.get(keys::ORDERS).await?.unwrap_or_default();
    Ok(OrdersIndexTemplate { orders })
}
