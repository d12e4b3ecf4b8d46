//! Live product search by name.

use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::types::{Product, Slug};

/// Longest search term accepted, in characters.
pub const MAX_TERM_LENGTH: usize = 200;

/// What the shopper has typed, plus an optional category scope.
///
/// Owned by the caller and rebuilt on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Raw search term. Surrounding whitespace is ignored when matching.
    #[serde(default)]
    pub term: String,
    /// Only products in this category are considered when set.
    #[serde(default)]
    pub category: Option<Slug>,
}

impl SearchState {
    /// Create a state for a term with no category scope.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: None,
        }
    }

    /// Build a state from untrusted input (query strings, CLI arguments).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if the term fails
    /// [`validate_term`] or the category is not a valid slug.
    pub fn parse(term: &str, category: Option<&str>) -> Result<Self, CatalogError> {
        let term = validate_term(term)?.to_owned();
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| {
                Slug::parse(c).map_err(|e| CatalogError::invalid(format!("category: {e}")))
            })
            .transpose()?;

        Ok(Self { term, category })
    }

    /// Scope the search to a category.
    #[must_use]
    pub fn with_category(mut self, category: Slug) -> Self {
        self.category = Some(category);
        self
    }

    /// The term as it is matched: trimmed of surrounding whitespace.
    #[must_use]
    pub fn effective_term(&self) -> &str {
        self.term.trim()
    }
}

/// Check a user-supplied term and return it trimmed.
///
/// # Errors
///
/// Returns `CatalogError::InvalidArgument` if the term is longer than
/// [`MAX_TERM_LENGTH`] characters or contains control characters.
pub fn validate_term(term: &str) -> Result<&str, CatalogError> {
    let trimmed = term.trim();

    if trimmed.chars().count() > MAX_TERM_LENGTH {
        return Err(CatalogError::invalid(format!(
            "search term must be at most {MAX_TERM_LENGTH} characters"
        )));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(CatalogError::invalid(
            "search term contains control characters",
        ));
    }

    Ok(trimmed)
}

/// Lowercase a string one character at a time.
///
/// Unlike [`str::to_lowercase`] this ignores word context (Greek final
/// sigma), so folding a prefix always yields a prefix of the folded whole.
#[must_use]
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Products whose name contains `term`, ignoring case.
///
/// Input order is preserved. An empty (or all-whitespace) term matches
/// every product.
///
/// ```
/// # use bazaar_core::{filter, Product, ProductId, Price, CurrencyCode, Slug};
/// # let p = |id, name: &str| Product {
/// #     id: ProductId::new(id),
/// #     name: name.to_string(),
/// #     price: Price::from_cents(100, CurrencyCode::USD),
/// #     image_url: String::new(),
/// #     image_alt: String::new(),
/// #     category: Slug::parse("misc").unwrap(),
/// # };
/// let products = vec![p(1, "Red Shoe"), p(2, "Blue Shoe"), p(3, "Red Hat")];
/// let names: Vec<_> = filter(&products, "red").iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Red Shoe", "Red Hat"]);
/// ```
#[must_use]
pub fn filter<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = fold_case(term.trim());
    products
        .iter()
        .filter(|product| matches_name(product, &needle))
        .collect()
}

fn matches_name(product: &Product, folded_term: &str) -> bool {
    folded_term.is_empty() || fold_case(&product.name).contains(folded_term)
}

/// Filter behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Show every product while the term is empty. When `false`, an empty
    /// term hides the result list entirely. Defaults to `true`.
    pub show_on_empty_term: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            show_on_empty_term: true,
        }
    }
}

impl FilterOptions {
    /// Run the filter for a search state.
    ///
    /// The category scope is applied first, then the name match.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product], state: &SearchState) -> FilterOutcome<'a> {
        let term = state.effective_term();
        if term.is_empty() && !self.show_on_empty_term {
            return FilterOutcome::Hidden;
        }

        let needle = fold_case(term);
        let matches = products
            .iter()
            .filter(|p| state.category.as_ref().is_none_or(|c| &p.category == c))
            .filter(|p| matches_name(p, &needle))
            .collect();

        FilterOutcome::Shown(matches)
    }
}

/// Result of running the filter for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    /// Nothing should be displayed (empty term with `show_on_empty_term` off).
    Hidden,
    /// Matching products in catalog order. May be empty.
    Shown(Vec<&'a Product>),
}

impl<'a> FilterOutcome<'a> {
    /// Whether the result list is hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Matching products, empty when hidden.
    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        match self {
            Self::Hidden => &[],
            Self::Shown(products) => products,
        }
    }

    /// Consume the outcome, returning the matches (empty when hidden).
    #[must_use]
    pub fn into_products(self) -> Vec<&'a Product> {
        match self {
            Self::Hidden => Vec::new(),
            Self::Shown(products) => products,
        }
    }
}
