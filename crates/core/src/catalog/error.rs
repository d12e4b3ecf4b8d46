//! Errors produced by the catalog core.

use thiserror::Error;

/// Errors returned by filtering and pagination.
///
/// These are always immediate and local: nothing in the core performs I/O,
/// so there is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An input had the wrong shape or violated an invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A page-change request fell outside `1..=total_pages`.
    #[error("page {requested} is out of range (total pages: {total_pages})")]
    OutOfRange {
        /// The page that was asked for.
        requested: u32,
        /// Number of pages available.
        total_pages: u32,
    },
}

impl CatalogError {
    /// Shorthand for [`CatalogError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
