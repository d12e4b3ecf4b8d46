//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Redirect to /shop
//! GET  /health          - Health check
//!
//! # Shop
//! GET  /shop            - Product listing (?q=&category=&page=)
//! GET  /search          - Live search results fragment (?q=)
//!
//! # JSON API
//! GET  /api/products    - Filtered, paged products (?q=&category=&page=&per_page=)
//! GET  /api/categories  - Category list
//! ```

pub mod api;
pub mod search;
pub mod shop;
pub mod views;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::home))
        .route("/shop", get(shop::index))
        .route("/search", get(search::suggest))
        .nest("/api", api::router())
}
