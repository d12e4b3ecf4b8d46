//! Catalog data sources.
//!
//! The core never fetches anything itself; a [`CatalogSource`] resolves the
//! full product and category collection once and hands it over. The only
//! implementation today reads a JSON document from disk:
//!
//! ```json
//! {
//!   "categories": [{ "id": 1, "slug": "shoes", "name": "Shoes" }],
//!   "products": [{
//!     "id": 1,
//!     "name": "Red Shoe",
//!     "price": { "amount": "49.00", "currency_code": "USD" },
//!     "image_url": "/static/img/red-shoe.svg",
//!     "image_alt": "A red running shoe",
//!     "category": "shoes"
//!   }]
//! }
//! ```

use std::path::{Path, PathBuf};

use bazaar_core::{Catalog, CatalogError};
use thiserror::Error;
use tracing::instrument;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for the catalog model.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog parsed but is internally inconsistent.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Something that can produce the full catalog.
pub trait CatalogSource {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogSourceError` if the data cannot be read, parsed or
    /// fails validation.
    fn load(&self) -> Result<Catalog, CatalogSourceError>;
}

/// Catalog stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate a catalog document already in memory.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `CatalogSourceError::Parse` or `CatalogSourceError::Invalid`.
    pub fn parse_str(origin: &Path, json: &str) -> Result<Catalog, CatalogSourceError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|source| CatalogSourceError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }
}

impl CatalogSource for JsonFileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| CatalogSourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let catalog = Self::parse_str(&self.path, &json)?;
        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    const VALID: &str = r#"{
        "categories": [{"id": 1, "slug": "shoes", "name": "Shoes"}],
        "products": [
            {"id": 1, "name": "Red Shoe", "price": {"amount": "49.00"},
             "image_url": "/static/img/red-shoe.svg", "category": "shoes"},
            {"id": 2, "name": "Blue Shoe", "price": {"amount": "45.00"},
             "image_url": "/static/img/blue-shoe.svg", "category": "shoes"}
        ]
    }"#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let catalog = JsonFileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.categories.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = JsonFileCatalog::new("/nonexistent/catalog.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonFileCatalog::parse_str(Path::new("inline"), "{ not json").unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse { .. }));
    }

    #[test]
    fn test_products_must_be_a_list() {
        let err =
            JsonFileCatalog::parse_str(Path::new("inline"), r#"{"products": "Red Shoe"}"#)
                .unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse { .. }));
    }

    #[test]
    fn test_inconsistent_catalog() {
        let json = VALID.replace(r#""category": "shoes"}"#, r#""category": "boots"}"#);
        let err = JsonFileCatalog::parse_str(Path::new("inline"), &json).unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::Invalid(CatalogError::InvalidArgument(_))
        ));
    }
}
