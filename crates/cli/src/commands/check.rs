//! Catalog validation command.
//!
//! # Usage
//!
//! ```bash
//! bazaar-cli check --catalog crates/storefront/data/catalog.json
//! ```

use std::path::Path;

use bazaar_core::Catalog;
use bazaar_storefront::source::{CatalogSource, CatalogSourceError, JsonFileCatalog};
use tracing::info;

/// Load and validate the catalog at `path`, then report what it holds.
///
/// # Errors
///
/// Returns `CatalogSourceError` if the file is unreadable, malformed or
/// inconsistent.
pub fn run(path: &Path) -> Result<(), CatalogSourceError> {
    let catalog = JsonFileCatalog::new(path).load()?;

    for (name, count) in category_counts(&catalog) {
        info!(category = %name, products = count, "Category");
    }

    #[allow(clippy::print_stdout)]
    {
        println!(
            "{}: {} products in {} categories",
            path.display(),
            catalog.products.len(),
            catalog.categories.len()
        );
    }
    Ok(())
}

/// Product count per category, in catalog order.
fn category_counts(catalog: &Catalog) -> Vec<(&str, usize)> {
    catalog
        .categories
        .iter()
        .map(|category| {
            let count = catalog
                .products
                .iter()
                .filter(|p| p.category == category.slug)
                .count();
            (category.name.as_str(), count)
        })
        .collect()
}
