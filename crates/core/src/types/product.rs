//! Catalog model: products, categories and the loaded catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CategoryId, Price, ProductId, Slug};
use crate::catalog::CatalogError;

/// A purchasable item.
///
/// Products are immutable once loaded; identity is [`Product::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    /// Alt text for the product image. Defaults to empty.
    #[serde(default)]
    pub image_alt: String,
    /// Slug of the category this product belongs to.
    pub category: Slug,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: String,
}

/// The full, already-resolved collection of products and categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog, checking referential integrity.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if [`Catalog::validate`] fails.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let catalog = Self {
            products,
            categories,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that the catalog is internally consistent.
    ///
    /// - Product IDs are unique and product names are non-blank
    /// - Category IDs and slugs are unique
    /// - Every product references an existing category
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` describing the first problem.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        let mut slugs = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(CatalogError::invalid(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
            if !slugs.insert(&category.slug) {
                return Err(CatalogError::invalid(format!(
                    "duplicate category slug '{}'",
                    category.slug
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::invalid(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::invalid(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if !slugs.contains(&product.category) {
                return Err(CatalogError::invalid(format!(
                    "product {} references unknown category '{}'",
                    product.id, product.category
                )));
            }
        }

        Ok(())
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category(&self, slug: &Slug) -> Option<&Category> {
        self.categories.iter().find(|c| &c.slug == slug)
    }
}
