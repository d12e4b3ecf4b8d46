//! Bazaar Core - catalog types and the search/pagination engine.
//!
//! This crate provides the pieces shared by every Bazaar component:
//! - `storefront` - Public-facing shop (HTML pages, live search fragments, JSON API)
//! - `cli` - Command-line tools for checking and querying catalogs
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no file access. Callers hand it an already-loaded [`Catalog`] and get back
//! filtered results, page slices and pagination controls.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, slugs and the catalog model
//! - [`catalog`] - Search filter, page slicer and paginator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{
    CatalogError, Control, FilterOptions, FilterOutcome, Page, PaginationState, Paginator,
    PaginatorOptions, SearchState, compute_controls, filter, paginate,
};
pub use types::*;
