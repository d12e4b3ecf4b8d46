//! Catalog search command.
//!
//! Runs the same filter, page slicer and paginator as the shop and prints
//! the result as text:
//!
//! ```text
//!   7  Red Wool Beanie        $18.00  hats
//!  18  Red Crossbody Bag      $48.00  bags
//!
//! Showing 1-2 of 2
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;

use bazaar_core::{
    Catalog, CatalogError, Control, FilterOptions, FilterOutcome, Paginator, PaginatorOptions,
    SearchState, paginate,
};
use bazaar_storefront::source::{CatalogSource, CatalogSourceError, JsonFileCatalog};
use thiserror::Error;

/// Errors that can occur while searching.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Source(#[from] CatalogSourceError),

    /// Invalid term, category or page.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Category slug is well-formed but not in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Options for one search run.
#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub catalog: PathBuf,
    pub term: String,
    pub category: Option<String>,
    pub page: u32,
    pub per_page: usize,
    pub hide_on_empty: bool,
    pub show_single_page: bool,
}

/// Load the catalog and print the requested page of matches.
///
/// # Errors
///
/// Returns `SearchError` if the catalog cannot be loaded, the arguments are
/// invalid or the page is out of range.
pub fn run(args: &SearchArgs) -> Result<(), SearchError> {
    let catalog = JsonFileCatalog::new(&args.catalog).load()?;
    let output = render(&catalog, args)?;

    #[allow(clippy::print_stdout)]
    {
        print!("{output}");
    }
    Ok(())
}

/// Produce the text report for `args`.
fn render(catalog: &Catalog, args: &SearchArgs) -> Result<String, SearchError> {
    let search = SearchState::parse(&args.term, args.category.as_deref())?;
    if let Some(slug) = &search.category
        && catalog.category(slug).is_none()
    {
        return Err(SearchError::UnknownCategory(slug.to_string()));
    }

    if args.page == 0 {
        return Err(CatalogError::invalid("page must be a positive integer, got '0'").into());
    }

    let filter = FilterOptions {
        show_on_empty_term: !args.hide_on_empty,
    };
    let matches = match filter.apply(&catalog.products, &search) {
        FilterOutcome::Hidden => {
            return Ok("Enter a search term to see matching products.\n".to_string());
        }
        FilterOutcome::Shown(matches) => matches,
    };

    let page = paginate(matches, args.page, args.per_page)?;
    tracing::debug!(
        term = %search.effective_term(),
        page = page.current_page(),
        total_pages = page.total_pages(),
        "Search complete"
    );

    let mut out = String::new();
    let Some((first, last)) = page.showing_range() else {
        out.push_str("No products match.\n");
        return Ok(out);
    };

    let name_width = page.items.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
    for product in &page.items {
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>10}  {}",
            product.id,
            product.name,
            product.price.to_string(),
            product.category
        );
    }
    let _ = writeln!(out, "\nShowing {first}-{last} of {}", page.total_items);

    let paginator = Paginator::new(PaginatorOptions {
        hide_single_page: !args.show_single_page,
    });
    let strip = format_controls(&paginator.controls(page.state));
    if !strip.is_empty() {
        let _ = writeln!(out, "{strip}");
    }
    Ok(out)
}

/// Render controls as a one-line strip, e.g. `‹ 1 … 4 [5] 6 … 10 ›`.
///
/// The current page is bracketed; disabled prev/next arrows are wrapped in
/// parentheses.
#[must_use]
pub fn format_controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|control| match *control {
            Control::Prev { enabled: true } => "‹".to_string(),
            Control::Prev { enabled: false } => "(‹)".to_string(),
            Control::Next { enabled: true } => "›".to_string(),
            Control::Next { enabled: false } => "(›)".to_string(),
            Control::PageNumber {
                number,
                active: true,
            } => format!("[{number}]"),
            Control::PageNumber { number, .. } => number.to_string(),
            Control::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use bazaar_core::compute_controls;

    use super::*;

    fn catalog() -> Catalog {
        let json = r#"{
            "categories": [
                {"id": 1, "slug": "shoes", "name": "Shoes"},
                {"id": 2, "slug": "hats", "name": "Hats"}
            ],
            "products": [
                {"id": 1, "name": "Red Shoe", "price": {"amount": "49.00"},
                 "image_url": "/a.svg", "category": "shoes"},
                {"id": 2, "name": "Blue Shoe", "price": {"amount": "45.00"},
                 "image_url": "/b.svg", "category": "shoes"},
                {"id": 3, "name": "Red Hat", "price": {"amount": "15.00"},
                 "image_url": "/c.svg", "category": "hats"}
            ]
        }"#;
        JsonFileCatalog::parse_str(Path::new("inline"), json).unwrap()
    }

    fn args(term: &str) -> SearchArgs {
        SearchArgs {
            catalog: PathBuf::from("inline"),
            term: term.to_string(),
            category: None,
            page: 1,
            per_page: 12,
            hide_on_empty: false,
            show_single_page: false,
        }
    }

    fn search(args: &SearchArgs) -> Result<String, SearchError> {
        render(&catalog(), args)
    }

    #[test]
    fn test_format_controls_mid_range() {
        assert_eq!(
            format_controls(&compute_controls(5, 10).unwrap()),
            "‹ 1 … 4 [5] 6 … 10 ›"
        );
    }

    #[test]
    fn test_format_controls_edges() {
        assert_eq!(format_controls(&compute_controls(1, 2).unwrap()), "(‹) [1] 2 ›");
        assert_eq!(format_controls(&compute_controls(2, 2).unwrap()), "‹ 1 [2] (›)");
        assert_eq!(format_controls(&[]), "");
    }

    #[test]
    fn test_search_matches_in_catalog_order() {
        let out = search(&args("red")).unwrap();
        let shoe = out.find("Red Shoe").unwrap();
        let hat = out.find("Red Hat").unwrap();
        assert!(shoe < hat);
        assert!(!out.contains("Blue Shoe"));
        assert!(out.contains("Showing 1-2 of 2"));
    }

    #[test]
    fn test_search_empty_term_lists_everything() {
        let out = search(&args("")).unwrap();
        assert!(out.contains("Showing 1-3 of 3"));

        let out = search(&SearchArgs {
            hide_on_empty: true,
            ..args("")
        })
        .unwrap();
        assert!(out.starts_with("Enter a search term"));
    }

    #[test]
    fn test_search_category_without_term() {
        let out = search(&SearchArgs {
            category: Some("shoes".to_string()),
            ..args("")
        })
        .unwrap();
        assert!(out.contains("Red Shoe"));
        assert!(out.contains("Blue Shoe"));
        assert!(!out.contains("Red Hat"));
    }

    #[test]
    fn test_search_pages_with_strip() {
        let out = search(&SearchArgs {
            page: 2,
            per_page: 1,
            ..args("shoe")
        })
        .unwrap();
        assert!(out.contains("Blue Shoe"));
        assert!(out.contains("‹ 1 [2] (›)"));
    }

    #[test]
    fn test_search_single_page_strip() {
        let out = search(&SearchArgs {
            show_single_page: true,
            ..args("hat")
        })
        .unwrap();
        assert!(out.contains("(‹) [1] (›)"));
    }

    #[test]
    fn test_search_category_scope() {
        let out = search(&SearchArgs {
            category: Some("hats".to_string()),
            ..args("red")
        })
        .unwrap();
        assert!(out.contains("Red Hat"));
        assert!(!out.contains("Red Shoe"));
    }

    #[test]
    fn test_search_errors() {
        assert!(matches!(
            search(&SearchArgs {
                category: Some("boots".to_string()),
                ..args("red")
            }),
            Err(SearchError::UnknownCategory(_))
        ));
        assert!(matches!(
            search(&SearchArgs {
                page: 3,
                ..args("red")
            }),
            Err(SearchError::Catalog(CatalogError::OutOfRange { .. }))
        ));
        assert!(matches!(
            search(&SearchArgs {
                page: 0,
                ..args("red")
            }),
            Err(SearchError::Catalog(CatalogError::InvalidArgument(_)))
        ));
        assert!(matches!(
            search(&SearchArgs {
                per_page: 0,
                ..args("red")
            }),
            Err(SearchError::Catalog(CatalogError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_search_no_matches() {
        let out = search(&args("kayak")).unwrap();
        assert_eq!(out, "No products match.\n");
    }
}
