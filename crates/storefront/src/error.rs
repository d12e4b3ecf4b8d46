//! Unified error handling.
//!
//! Provides a unified `AppError` type that maps catalog errors to HTTP
//! statuses. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bazaar_core::CatalogError;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Filtering or pagination rejected the request.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::InvalidArgument(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Catalog(CatalogError::OutOfRange { .. }) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors only, not reported to Sentry
        tracing::debug!(error = %self, "Request rejected");

        (self.status(), self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for shopper actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("search", "Live search", Some(&[("term", "red")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
