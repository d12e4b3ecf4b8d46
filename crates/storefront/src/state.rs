//! Application state shared across handlers.

use std::sync::Arc;

use bazaar_core::Catalog;

use crate::config::{ListingConfig, StorefrontConfig};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is loaded once at
/// startup and is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Loaded and validated catalog
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the listing behaviour settings.
    #[must_use]
    pub fn listing(&self) -> &ListingConfig {
        &self.inner.config.listing
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
