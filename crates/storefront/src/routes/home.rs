//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{Category, Product};
use crate::filters;
use crate::models::RecentlyViewed;
use crate::models::session::keys;
use crate::services::whatsapp;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Products carrying the featured flag.
    pub featured: Vec<&'static Product>,
    /// Categories with product counts for the navigation tiles.
    pub categories: Vec<(Category, usize)>,
    /// Recently viewed products, most recent first.
    pub recently_viewed: Vec<&'static Product>,
    /// WhatsApp contact link with the pre-filled message.
    pub whatsapp_url: String,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let catalog = state.catalog();

    let viewed: RecentlyViewed = session
        .get(keys::RECENTLY_VIEWED)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();

    let recently_viewed = viewed
        .product_ids()
        .iter()
        .filter_map(|&id| catalog.get(id))
        .collect();

    HomeTemplate {
        featured: catalog.featured(),
        categories: catalog.category_counts(),
        recently_viewed,
        whatsapp_url: whatsapp::contact_url(),
    }
}
