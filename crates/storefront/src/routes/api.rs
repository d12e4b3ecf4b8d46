//! JSON API for catalog listings.

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
    routing::get,
};
use bazaar_core::{Category, Control, Product};
use serde::Serialize;
use tracing::instrument;

use crate::config::parse_per_page;
use crate::error::{AppError, Result};
use crate::listing::{ListingQuery, build_listing};
use crate::state::AppState;

/// Response body for `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse<'a> {
    pub items: Vec<&'a Product>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub per_page: usize,
    pub controls: Vec<Control>,
}

/// Filtered, paged product listing.
///
/// Accepts `q`, `category`, `page` and `per_page` (1-100, defaults to the
/// configured page size).
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response> {
    let query = ListingQuery::from_raw(raw.as_deref())?;
    let search = query.search_state()?;
    let page = query.page()?;
    let per_page = match query.per_page.as_deref().map(str::trim) {
        None | Some("") => state.listing().products_per_page,
        Some(raw) => parse_per_page(raw).map_err(AppError::BadRequest)?,
    };

    let listing = build_listing(
        state.catalog(),
        search,
        page,
        per_page,
        state.listing().paginator(),
    )?;

    let body = ProductsResponse {
        page: listing.page.current_page(),
        total_pages: listing.page.total_pages(),
        total_items: listing.page.total_items,
        per_page: listing.page.per_page,
        controls: listing.controls,
        items: listing.page.items,
    };

    Ok(Json(body).into_response())
}

/// All categories in catalog order.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories.clone())
}

/// Create the API routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products))
        .route("/categories", get(categories))
}
