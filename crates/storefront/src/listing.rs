//! Listing pipeline shared by the shop page and the JSON API.
//!
//! Query parameters are parsed into a [`SearchState`] and a page number, the
//! catalog is filtered and sliced, and the paginator decides which controls
//! to show. Handlers only choose how to render the result.

use bazaar_core::{
    Catalog, Category, CatalogError, Control, FilterOptions, Page, Paginator, Product,
    SearchState, paginate,
};

use crate::error::{AppError, Result};

/// Query parameters accepted by listing endpoints.
///
/// Built from the raw query string with [`ListingQuery::from_raw`] so that
/// malformed values surface as `CatalogError::InvalidArgument` instead of
/// being coerced by an extractor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub q: String,
    pub category: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListingQuery {
    /// Decode a raw query string (`q=red&page=2`).
    ///
    /// `+` is a space and values are percent-decoded strictly. Unknown keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if a value does not decode to
    /// UTF-8 or a known key is repeated.
    pub fn from_raw(raw: Option<&str>) -> std::result::Result<Self, CatalogError> {
        let mut query = Self::default();
        let mut q = None;

        for pair in raw.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let slot = match key.as_str() {
                "q" => &mut q,
                "category" => &mut query.category,
                "page" => &mut query.page,
                "per_page" => &mut query.per_page,
                _ => continue,
            };
            if slot.is_some() {
                return Err(CatalogError::invalid(format!(
                    "query parameter '{key}' given more than once"
                )));
            }
            *slot = Some(decode_component(value)?);
        }

        query.q = q.unwrap_or_default();
        Ok(query)
    }

    /// The search state described by `q` and `category`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` for an unacceptable term or
    /// malformed category slug.
    pub fn search_state(&self) -> std::result::Result<SearchState, CatalogError> {
        SearchState::parse(&self.q, self.category.as_deref())
    }

    /// The requested page, defaulting to 1.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` unless `page` is a positive
    /// integer.
    pub fn page(&self) -> std::result::Result<u32, CatalogError> {
        parse_page(self.page.as_deref())
    }
}

/// Parse a `page` query value. Missing or blank means page 1.
///
/// # Errors
///
/// Returns `CatalogError::InvalidArgument` unless the value is a positive
/// integer.
pub fn parse_page(raw: Option<&str>) -> std::result::Result<u32, CatalogError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(1);
    };
    raw.parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| CatalogError::invalid(format!("page must be a positive integer, got '{raw}'")))
}

/// Percent-decode one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str) -> std::result::Result<String, CatalogError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| CatalogError::invalid(format!("query value '{raw}' is not valid UTF-8")))
}

/// A filtered, paged slice of the catalog ready for rendering.
#[derive(Debug)]
pub struct Listing<'a> {
    pub search: SearchState,
    pub category: Option<&'a Category>,
    pub page: Page<&'a Product>,
    pub controls: Vec<Control>,
}

impl Listing<'_> {
    /// Link to another page of this listing, keeping the search.
    #[must_use]
    pub fn href(&self, base: &str, page: u32) -> String {
        listing_href(base, &self.search, page)
    }
}

/// Run the filter, page slicer and paginator for a request.
///
/// # Errors
///
/// - `AppError::Catalog` for invalid parameters or an out-of-range page
/// - `AppError::NotFound` for a category slug that is not in the catalog
pub fn build_listing<'a>(
    catalog: &'a Catalog,
    search: SearchState,
    page: u32,
    per_page: usize,
    paginator: Paginator,
) -> Result<Listing<'a>> {
    let category = match &search.category {
        Some(slug) => Some(
            catalog
                .category(slug)
                .ok_or_else(|| AppError::NotFound(format!("category '{slug}'")))?,
        ),
        None => None,
    };

    // Browsing always lists the catalog; hiding on an empty term is a live
    // search concern.
    let matches = FilterOptions::default()
        .apply(&catalog.products, &search)
        .into_products();
    let page = paginate(matches, page, per_page)?;
    let controls = paginator.controls(page.state);

    tracing::debug!(
        term = %search.effective_term(),
        category = ?search.category,
        page = page.current_page(),
        total_pages = page.total_pages(),
        total_items = page.total_items,
        "Listing built"
    );

    Ok(Listing {
        search,
        category,
        page,
        controls,
    })
}

/// Build `base?q=..&category=..&page=N`, omitting empty parameters.
#[must_use]
pub fn listing_href(base: &str, search: &SearchState, page: u32) -> String {
    let mut params = Vec::with_capacity(3);
    let term = search.effective_term();
    if !term.is_empty() {
        params.push(format!("q={}", urlencoding::encode(term)));
    }
    if let Some(category) = &search.category {
        params.push(format!("category={category}"));
    }
    if page > 1 {
        params.push(format!("page={page}"));
    }

    if params.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", params.join("&"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bazaar_core::{CategoryId, CurrencyCode, Price, ProductId, Slug};

    use super::*;

    fn catalog(count: u32) -> Catalog {
        let categories = vec![
            Category {
                id: CategoryId::new(1),
                slug: Slug::parse("shoes").unwrap(),
                name: "Shoes".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                slug: Slug::parse("hats").unwrap(),
                name: "Hats".to_string(),
            },
        ];
        let products = (1..=count)
            .map(|id| Product {
                id: ProductId::new(id),
                name: if id % 2 == 0 {
                    format!("Red Hat {id}")
                } else {
                    format!("Blue Shoe {id}")
                },
                price: Price::from_cents(i64::from(id) * 100, CurrencyCode::USD),
                image_url: format!("/static/img/{id}.svg"),
                image_alt: String::new(),
                category: Slug::parse(if id % 2 == 0 { "hats" } else { "shoes" }).unwrap(),
            })
            .collect();
        Catalog::new(products, categories).unwrap()
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("")).unwrap(), 1);
        assert_eq!(parse_page(Some(" 3 ")).unwrap(), 3);
        assert!(matches!(
            parse_page(Some("0")),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_page(Some("-1")),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_page(Some("two")),
            Err(CatalogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_query_from_raw() {
        let query =
            ListingQuery::from_raw(Some("q=red+hat&category=hats&page=2&per_page=5&utm=x"))
                .unwrap();
        assert_eq!(
            query,
            ListingQuery {
                q: "red hat".to_string(),
                category: Some("hats".to_string()),
                page: Some("2".to_string()),
                per_page: Some("5".to_string()),
            }
        );

        assert_eq!(ListingQuery::from_raw(None).unwrap(), ListingQuery::default());
        assert_eq!(ListingQuery::from_raw(Some("q=a%26b")).unwrap().q, "a&b");
        assert_eq!(ListingQuery::from_raw(Some("q=caf%C3%A9")).unwrap().q, "café");
        assert_eq!(ListingQuery::from_raw(Some("q")).unwrap().q, "");
    }

    #[test]
    fn test_query_from_raw_rejects_malformed_values() {
        assert!(matches!(
            ListingQuery::from_raw(Some("q=%FF")),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            ListingQuery::from_raw(Some("category=%C3")),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            ListingQuery::from_raw(Some("page=1&page=2")),
            Err(CatalogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_listing_filters_and_pages() {
        let catalog = catalog(40);
        let listing = build_listing(
            &catalog,
            SearchState::new("hat"),
            2,
            5,
            Paginator::default(),
        )
        .unwrap();

        assert_eq!(listing.page.total_items, 20);
        assert_eq!(listing.page.total_pages(), 4);
        assert_eq!(listing.page.items.len(), 5);
        assert_eq!(listing.page.items[0].name, "Red Hat 12");
        assert!(listing.controls.contains(&Control::PageNumber {
            number: 2,
            active: true
        }));
    }

    #[test]
    fn test_build_listing_category_scope() {
        let catalog = catalog(10);
        let search = SearchState::parse("", Some("shoes")).unwrap();
        let listing = build_listing(&catalog, search, 1, 12, Paginator::default()).unwrap();

        assert_eq!(listing.category.unwrap().name, "Shoes");
        assert!(listing.page.items.iter().all(|p| p.name.starts_with("Blue Shoe")));
        // one page, strip hidden
        assert!(listing.controls.is_empty());
    }

    #[test]
    fn test_build_listing_unknown_category() {
        let catalog = catalog(4);
        let search = SearchState::parse("", Some("boots")).unwrap();
        let err = build_listing(&catalog, search, 1, 12, Paginator::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_build_listing_out_of_range() {
        let catalog = catalog(4);
        let err = build_listing(&catalog, SearchState::default(), 3, 2, Paginator::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::OutOfRange {
                requested: 3,
                total_pages: 2
            })
        ));
    }

    #[test]
    fn test_build_listing_no_matches() {
        let catalog = catalog(4);
        let listing =
            build_listing(&catalog, SearchState::new("kayak"), 1, 12, Paginator::default())
                .unwrap();
        assert!(listing.page.items.is_empty());
        assert_eq!(listing.page.total_pages(), 0);
        assert!(listing.controls.is_empty());
    }

    #[test]
    fn test_listing_href() {
        let search = SearchState::parse("red hat", Some("hats")).unwrap();
        assert_eq!(
            listing_href("/shop", &search, 3),
            "/shop?q=red%20hat&category=hats&page=3"
        );
        assert_eq!(listing_href("/shop", &SearchState::default(), 1), "/shop");
        assert_eq!(
            listing_href("/shop", &SearchState::new("a&b"), 1),
            "/shop?q=a%26b"
        );
    }
}
