//! Integration tests for loading catalogs from disk.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use bazaar_storefront::source::{CatalogSource, CatalogSourceError, JsonFileCatalog};

#[test]
fn test_bundled_catalog_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/data/catalog.json");
    let catalog = JsonFileCatalog::new(path).load().unwrap();

    assert!(!catalog.products.is_empty());
    assert!(
        catalog
            .products
            .iter()
            .all(|p| catalog.category(&p.category).is_some())
    );
}

#[test]
fn test_duplicate_product_ids_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "categories": [{"id": 1, "slug": "shoes", "name": "Shoes"}],
            "products": [
                {"id": 1, "name": "Red Shoe", "price": {"amount": "49.00"},
                 "image_url": "/a.svg", "category": "shoes"},
                {"id": 1, "name": "Blue Shoe", "price": {"amount": "45.00"},
                 "image_url": "/b.svg", "category": "shoes"}
            ]
        }"#,
    )
    .unwrap();

    let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
    assert!(matches!(err, CatalogSourceError::Invalid(_)));
}
