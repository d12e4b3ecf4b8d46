//! Integration tests for Bazaar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bazaar-integration-tests
//! ```
//!
//! Tests drive the storefront router in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Test Categories
//!
//! - `storefront_routes` - Shop page, live search and JSON API
//! - `catalog_source` - Loading catalogs from disk

#![allow(clippy::missing_panics_doc)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use bazaar_core::{Catalog, Category, CategoryId, CurrencyCode, Price, Product, ProductId, Slug};
use bazaar_storefront::config::{ListingConfig, StorefrontConfig};
use bazaar_storefront::state::AppState;
use tower::ServiceExt;

/// A catalog of `count` products split over `shoes` and `hats`.
///
/// Even ids are `"Red Hat {id}"` in `hats`, odd ids are `"Blue Shoe {id}"`
/// in `shoes`.
#[must_use]
pub fn sample_catalog(count: u32) -> Catalog {
    let categories = vec![
        Category {
            id: CategoryId::new(1),
            slug: slug("shoes"),
            name: "Shoes".to_string(),
        },
        Category {
            id: CategoryId::new(2),
            slug: slug("hats"),
            name: "Hats".to_string(),
        },
    ];

    let products = (1..=count)
        .map(|id| {
            let (name, category) = if id % 2 == 0 {
                (format!("Red Hat {id}"), "hats")
            } else {
                (format!("Blue Shoe {id}"), "shoes")
            };
            Product {
                id: ProductId::new(id),
                name,
                price: Price::from_cents(i64::from(id) * 250, CurrencyCode::USD),
                image_url: format!("/static/img/{category}.svg"),
                image_alt: String::new(),
                category: slug(category),
            }
        })
        .collect();

    Catalog::new(products, categories).expect("sample catalog is valid")
}

fn slug(raw: &str) -> Slug {
    Slug::parse(raw).expect("fixture slug is valid")
}

/// Storefront configuration with defaults and the given listing settings.
#[must_use]
pub fn test_config(listing: ListingConfig) -> StorefrontConfig {
    let mut config =
        StorefrontConfig::from_lookup(|_| None).expect("default configuration is valid");
    config.listing = listing;
    config.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static");
    config
}

/// The storefront router over `catalog`.
#[must_use]
pub fn test_app(catalog: Catalog, listing: ListingConfig) -> Router {
    bazaar_storefront::app(AppState::new(test_config(listing), catalog))
}

/// Response parts captured for assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

/// Send a `GET` to `app` and collect the response.
pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
