//! Live search fragment, requested by the search box as the shopper types.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use bazaar_core::SearchState;
use tracing::instrument;

use super::views::ProductView;
use crate::error::{Result, add_breadcrumb};
use crate::listing::{ListingQuery, listing_href};
use crate::state::AppState;

/// Most products listed in the live results dropdown.
pub const SUGGESTION_LIMIT: usize = 8;

/// Live results fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    /// Nothing to show (empty term with empty-term results switched off).
    pub hidden: bool,
    pub term: String,
    pub products: Vec<ProductView>,
    pub total: usize,
    /// Link to the full shop listing when there are more matches than shown.
    pub more_href: Option<String>,
}

/// Live search endpoint.
///
/// Returns an HTML fragment with the first matches in catalog order.
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<SearchResultsTemplate> {
    // Only the term applies; the dropdown is never category-scoped
    let query = ListingQuery::from_raw(raw.as_deref())?;
    let search = SearchState::parse(&query.q, None)?;
    let term = search.effective_term().to_string();

    if !term.is_empty() {
        add_breadcrumb("search", "Live search", Some(&[("term", term.as_str())][..]));
    }

    let outcome = state
        .listing()
        .search_filter()
        .apply(&state.catalog().products, &search);

    if outcome.is_hidden() {
        return Ok(SearchResultsTemplate {
            hidden: true,
            term,
            products: Vec::new(),
            total: 0,
            more_href: None,
        });
    }

    let matches = outcome.products();
    let total = matches.len();
    let more_href = (total > SUGGESTION_LIMIT).then(|| listing_href("/shop", &search, 1));

    Ok(SearchResultsTemplate {
        hidden: false,
        term,
        products: matches
            .iter()
            .take(SUGGESTION_LIMIT)
            .copied()
            .map(ProductView::from)
            .collect(),
        total,
        more_href,
    })
}
