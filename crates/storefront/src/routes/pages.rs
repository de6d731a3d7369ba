//! Static content page route handlers.
//!
//! Serves markdown-based information pages (warranty, delivery, returns,
//! privacy, terms, cookies, help centre) by slug.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/show.html")]
pub struct ContentPageTemplate {
    pub title: String,
    pub description: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Serve a content page by slug.
///
/// # Errors
///
/// Returns 404 if no page with the slug exists.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let page = state
        .content()
        .get_page(&slug)
        .ok_or_else(|| AppError::NotFound(format!("page {slug}")))?;

    Ok(ContentPageTemplate {
        title: page.meta.title.clone(),
        description: page.meta.description.clone().unwrap_or_default(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    })
}
