//! Wishlist route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hive_image_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::models::{Wishlist, WishlistOutcome};
use crate::models::session::keys;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistShowTemplate {
    pub products: Vec<ProductCardView>,
}

/// Wishlist heart button fragment template (for HTMX). Carries an
/// out-of-band toast announcing what the toggle did.
#[derive(Template, WebTemplate)]
#[template(path = "partials/wishlist_button.html")]
pub struct WishlistButtonTemplate {
    pub product_id: ProductId,
    pub in_wishlist: bool,
    pub message: &'static str,
}

/// Toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub product_id: i32,
}

async fn get_wishlist(session: &Session) -> Result<Wishlist> {
    Ok(session.get(keys::WISHLIST).await?.unwrap_or_default())
}

/// Display the wishlist page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let wishlist = get_wishlist(&session).await?;
    let compare: crate::models::ComparisonSet =
        session.get(keys::COMPARE).await?.unwrap_or_default();

    let products = wishlist
        .product_ids()
        .iter()
        .filter_map(|&id| catalog.get(id))
        .map(|product| ProductCardView {
            product,
            in_wishlist: true,
            in_compare: compare.contains(product.id),
        })
        .collect();

    Ok(WishlistShowTemplate { products })
}

/// Toggle a product in or out of the wishlist (HTMX).
///
/// Returns the heart button fragment in its new state plus a toast
/// announcing the add or remove.
#[instrument(skip(session))]
pub async fn toggle(session: Session, Form(form): Form<ToggleForm>) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let mut wishlist = get_wishlist(&session).await?;
    let outcome = wishlist.toggle(product_id);
    session.insert(keys::WISHLIST, &wishlist).await?;

    let message = match outcome {
        WishlistOutcome::Added => "Added to wishlist",
        WishlistOutcome::Removed => "Removed from wishlist",
    };

    Ok((
        AppendHeaders([("HX-Trigger", "wishlist-updated")]),
        WishlistButtonTemplate {
            product_id,
            in_wishlist: wishlist.contains(product_id),
            message,
        },
    )
        .into_response())
}
