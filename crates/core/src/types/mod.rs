//! Core types for Bazaar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod slug;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Catalog, Category, Product};
pub use slug::{Slug, SlugError};
