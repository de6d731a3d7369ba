//! Product route handlers.
//!
//! The shop listing supports category, price-range, and rating filters via
//! query parameters. Product detail views are recorded in the session's
//! recently-viewed history.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hive_image_core::ProductId;

use crate::catalog::{Category, Product, ProductFilter};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::keys;
use crate::models::{ComparisonSet, RecentlyViewed, Wishlist};
use crate::state::AppState;

/// Product card display data: the catalog item plus per-visitor flags.
#[derive(Clone)]
pub struct ProductCardView {
    pub product: &'static Product,
    pub in_wishlist: bool,
    pub in_compare: bool,
}

/// Filter query parameters for the shop listing.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f32>,
}

impl FilterQuery {
    /// Convert the raw query into a filter. Unknown category names fall
    /// back to "all categories" rather than erroring.
    fn to_filter(&self) -> ProductFilter {
        let defaults = ProductFilter::default();
        ProductFilter {
            category: self
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .and_then(|c| c.parse().ok()),
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<(Category, usize)>,
    pub filter: ProductFilter,
    pub compare_count: usize,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: &'static Product,
    pub in_wishlist: bool,
    pub in_compare: bool,
    pub related: Vec<ProductCardView>,
}

/// Quick view fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: &'static Product,
    pub in_wishlist: bool,
}

/// Push a product onto the visitor's recently-viewed history.
async fn record_view(session: &Session, product_id: ProductId) -> Result<()> {
    let mut viewed: RecentlyViewed = session
        .get(keys::RECENTLY_VIEWED)
        .await?
        .unwrap_or_default();
    viewed.record(product_id);
    session.insert(keys::RECENTLY_VIEWED, &viewed).await?;
    Ok(())
}

/// Load the per-visitor flags used by product cards.
async fn visitor_flags(session: &Session) -> (Wishlist, ComparisonSet) {
    let wishlist = session
        .get(keys::WISHLIST)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    let compare = session
        .get(keys::COMPARE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    (wishlist, compare)
}

/// Display the shop listing, filtered.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FilterQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let filter = query.to_filter();
    let (wishlist, compare) = visitor_flags(&session).await;

    let products = catalog
        .filter(&filter)
        .into_iter()
        .map(|product| ProductCardView {
            product,
            in_wishlist: wishlist.contains(product.id),
            in_compare: compare.contains(product.id),
        })
        .collect();

    ProductsIndexTemplate {
        products,
        categories: catalog.category_counts(),
        filter,
        compare_count: compare.len(),
    }
}

/// Display a product detail page and record the view.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let product_id = ProductId::new(id);
    let product = catalog
        .get(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    record_view(&session, product_id).await?;

    let (wishlist, compare) = visitor_flags(&session).await;

    // Same-category suggestions
    let related = catalog
        .products()
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(4)
        .map(|p| ProductCardView {
            product: p,
            in_wishlist: wishlist.contains(p.id),
            in_compare: compare.contains(p.id),
        })
        .collect();

    Ok(ProductShowTemplate {
        product,
        in_wishlist: wishlist.contains(product_id),
        in_compare: compare.contains(product_id),
        related,
    })
}

/// Display the quick view fragment (for HTMX). Counts as a view for the
/// recently-viewed history, same as the full detail page.
#[instrument(skip(state, session))]
pub async fn quick_view(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let product_id = ProductId::new(id);
    let product = state
        .catalog()
        .get(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    record_view(&session, product_id).await?;

    let (wishlist, _) = visitor_flags(&session).await;

    Ok(QuickViewTemplate {
        product,
        in_wishlist: wishlist.contains(product_id),
    })
}
