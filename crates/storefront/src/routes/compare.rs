//! Side-by-side comparison route handlers.
//!
//! The comparison set is capped at three products. Toggling a fourth is
//! rejected and the bar fragment carries the rejection message instead.

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

use crate::catalog::Product;
use crate::error::Result;
use crate::filters;
use crate::models::session::keys;
use crate::models::{CompareOutcome, ComparisonSet, MAX_COMPARE_PRODUCTS};
use crate::state::AppState;

/// Message shown when a fourth product is rejected.
pub const MAX_COMPARE_MESSAGE: &str = "Max 3 products for comparison";

/// Comparison page template.
#[derive(Template, WebTemplate)]
#[template(path = "compare/show.html")]
pub struct CompareShowTemplate {
    pub products: Vec<&'static Product>,
    pub max_products: usize,
}

/// Comparison bar fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/compare_bar.html")]
pub struct CompareBarTemplate {
    pub products: Vec<&'static Product>,
    pub message: Option<&'static str>,
}

/// Toggle or remove form data.
#[derive(Debug, Deserialize)]
pub struct CompareForm {
    pub product_id: i32,
}

async fn get_compare(session: &Session) -> Result<ComparisonSet> {
    Ok(session.get(keys::COMPARE).await?.unwrap_or_default())
}

fn resolve_products(state: &AppState, set: &ComparisonSet) -> Vec<&'static Product> {
    let catalog = state.catalog();
    set.product_ids()
        .iter()
        .filter_map(|&id| catalog.get(id))
        .collect()
}

/// Display the comparison page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let set = get_compare(&session).await?;
    Ok(CompareShowTemplate {
        products: resolve_products(&state, &set),
        max_products: MAX_COMPARE_PRODUCTS,
    })
}

/// Toggle a product in the comparison set (HTMX).
///
/// Returns the comparison bar fragment. A rejected add (the set is full)
/// keeps the set unchanged and surfaces the rejection message.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CompareForm>,
) -> Result<Response> {
    let mut set = get_compare(&session).await?;
    let outcome = set.toggle(ProductId::new(form.product_id));
    session.insert(keys::COMPARE, &set).await?;

    let message = match outcome {
        CompareOutcome::Rejected => Some(MAX_COMPARE_MESSAGE),
        CompareOutcome::Added | CompareOutcome::Removed => None,
    };

    Ok((
        AppendHeaders([("HX-Trigger", "compare-updated")]),
        CompareBarTemplate {
            products: resolve_products(&state, &set),
            message,
        },
    )
        .into_response())
}

/// Remove a product from the comparison set (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CompareForm>,
) -> Result<Response> {
    let mut set = get_compare(&session).await?;
    set.remove(ProductId::new(form.product_id));
    session.insert(keys::COMPARE, &set).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "compare-updated")]),
        CompareBarTemplate {
            products: resolve_products(&state, &set),
            message: None,
        },
    )
        .into_response())
}

/// Clear the comparison set (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    session.insert(keys::COMPARE, &ComparisonSet::default()).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "compare-updated")]),
        CompareBarTemplate {
            products: Vec::new(),
            message: None,
        },
    )
        .into_response())
}

/// Comparison bar fragment endpoint (HTMX refresh target).
#[instrument(skip(state, session))]
pub async fn bar(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let set = get_compare(&session).await?;
    Ok(CompareBarTemplate {
        products: resolve_products(&state, &set),
        message: None,
    })
}
