//! Shop listing page: search box, category filter, product grid and
//! pagination strip.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{RawQuery, State},
    response::Redirect,
};
use bazaar_core::SearchState;
use tracing::instrument;

use super::views::{CategoryView, ControlView, ProductView};
use crate::error::Result;
use crate::filters;
use crate::listing::{ListingQuery, build_listing, listing_href};
use crate::state::AppState;

const SHOP_PATH: &str = "/shop";

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub query: String,
    pub heading: String,
    pub summary: String,
    pub all_href: String,
    pub all_active: bool,
    pub categories: Vec<CategoryView>,
    pub products: Vec<ProductView>,
    pub controls: Vec<ControlView>,
}

/// Send the bare domain to the shop.
pub async fn home() -> Redirect {
    Redirect::to(SHOP_PATH)
}

/// Display the shop listing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<ShopTemplate> {
    let query = ListingQuery::from_raw(raw.as_deref())?;
    let search = query.search_state()?;
    let page = query.page()?;
    let listing = build_listing(
        state.catalog(),
        search,
        page,
        state.listing().products_per_page,
        state.listing().paginator(),
    )?;

    let term = listing.search.effective_term().to_string();
    let current_page = listing.page.current_page();

    let heading = match (listing.category, term.is_empty()) {
        (Some(category), true) => category.name.clone(),
        (Some(category), false) => format!("“{term}” in {}", category.name),
        (None, true) => "All products".to_string(),
        (None, false) => format!("Results for “{term}”"),
    };

    let summary = match listing.page.showing_range() {
        Some((first, last)) => format!(
            "Showing {first}–{last} of {} products",
            listing.page.total_items
        ),
        None => "No products match your search.".to_string(),
    };

    // Category links keep the term but start again at page 1
    let categories = state
        .catalog()
        .categories
        .iter()
        .map(|category| {
            let scoped = SearchState::new(term.clone()).with_category(category.slug.clone());
            CategoryView::new(category, listing_href(SHOP_PATH, &scoped, 1), listing.category)
        })
        .collect();

    let controls = listing
        .controls
        .iter()
        .map(|control| {
            ControlView::new(*control, current_page, |page| listing.href(SHOP_PATH, page))
        })
        .collect();
    let products = listing.page.map(ProductView::from);

    Ok(ShopTemplate {
        all_href: listing_href(SHOP_PATH, &SearchState::new(term.clone()), 1),
        all_active: listing.category.is_none(),
        query: term,
        heading,
        summary,
        categories,
        products: products.items,
        controls,
    })
}
