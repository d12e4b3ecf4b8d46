//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: crates/storefront/data/catalog.json)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `STOREFRONT_PRODUCTS_PER_PAGE` - Products per shop page (default: 12)
//! - `STOREFRONT_SHOW_ON_EMPTY_TERM` - Live search lists everything for an empty term (default: true)
//! - `STOREFRONT_HIDE_SINGLE_PAGE` - Hide the pagination strip when there is one page (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use bazaar_core::{FilterOptions, Paginator, PaginatorOptions};
use thiserror::Error;

/// Largest page size accepted from configuration or the JSON API.
pub const MAX_PER_PAGE: usize = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the catalog JSON document
    pub catalog_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Listing and search behaviour
    pub listing: ListingConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// How product listings are filtered and paged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    /// Products per shop page.
    pub products_per_page: usize,
    /// Live search shows every product while the term is empty.
    pub show_on_empty_term: bool,
    /// Hide the pagination strip when everything fits on one page.
    pub hide_single_page: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            products_per_page: 12,
            show_on_empty_term: true,
            hide_single_page: true,
        }
    }
}

impl ListingConfig {
    /// Filter options for the live search box.
    #[must_use]
    pub const fn search_filter(&self) -> FilterOptions {
        FilterOptions {
            show_on_empty_term: self.show_on_empty_term,
        }
    }

    /// Paginator for listing pages.
    #[must_use]
    pub const fn paginator(&self) -> Paginator {
        Paginator::new(PaginatorOptions {
            hide_single_page: self.hide_single_page,
        })
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env
            .or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = env
            .or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let catalog_path = PathBuf::from(
            env.or_default("STOREFRONT_CATALOG_PATH", "crates/storefront/data/catalog.json"),
        );
        let static_dir =
            PathBuf::from(env.or_default("STOREFRONT_STATIC_DIR", "crates/storefront/static"));

        let listing = ListingConfig::from_env(&env)?;

        Ok(Self {
            host,
            port,
            catalog_path,
            static_dir,
            listing,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ListingConfig {
    fn from_env(env: &Env<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let products_per_page = match env.optional("STOREFRONT_PRODUCTS_PER_PAGE") {
            None => defaults.products_per_page,
            Some(raw) => parse_per_page(&raw).map_err(|reason| {
                ConfigError::InvalidEnvVar("STOREFRONT_PRODUCTS_PER_PAGE".to_string(), reason)
            })?,
        };

        Ok(Self {
            products_per_page,
            show_on_empty_term: env
                .bool_or("STOREFRONT_SHOW_ON_EMPTY_TERM", defaults.show_on_empty_term)?,
            hide_single_page: env
                .bool_or("STOREFRONT_HIDE_SINGLE_PAGE", defaults.hide_single_page)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a page size, accepting `1..=MAX_PER_PAGE`.
///
/// # Errors
///
/// Returns a human-readable reason when the value is not a number in range.
pub fn parse_per_page(raw: &str) -> Result<usize, String> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("'{raw}' is not a page size: {e}"))?;
    if value == 0 || value > MAX_PER_PAGE {
        return Err(format!("page size must be between 1 and {MAX_PER_PAGE}"));
    }
    Ok(value)
}

/// Variable lookup with typed accessors.
struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Get a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
    fn bool_or(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("'{raw}' is not a boolean"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.catalog_path,
            PathBuf::from("crates/storefront/data/catalog.json")
        );
        assert_eq!(config.listing, ListingConfig::default());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_HOST", "0.0.0.0"),
            ("STOREFRONT_PORT", "8080"),
            ("STOREFRONT_PRODUCTS_PER_PAGE", "24"),
            ("STOREFRONT_SHOW_ON_EMPTY_TERM", "off"),
            ("STOREFRONT_HIDE_SINGLE_PAGE", "0"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.listing.products_per_page, 24);
        assert!(!config.listing.show_on_empty_term);
        assert!(!config.listing.hide_single_page);
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[("STOREFRONT_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STOREFRONT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_invalid_per_page() {
        assert!(load(&[("STOREFRONT_PRODUCTS_PER_PAGE", "0")]).is_err());
        assert!(load(&[("STOREFRONT_PRODUCTS_PER_PAGE", "101")]).is_err());
        assert!(load(&[("STOREFRONT_PRODUCTS_PER_PAGE", "many")]).is_err());
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[("STOREFRONT_HIDE_SINGLE_PAGE", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_HIDE_SINGLE_PAGE"));
    }

    #[test]
    fn test_listing_options() {
        let listing = ListingConfig {
            products_per_page: 12,
            show_on_empty_term: false,
            hide_single_page: false,
        };
        assert!(!listing.search_filter().show_on_empty_term);
        assert!(!listing.paginator().options().hide_single_page);
    }
}
