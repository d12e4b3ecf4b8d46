//! Catalog search and pagination.
//!
//! The pipeline a listing page runs is:
//!
//! ```text
//! Catalog ─► filter (term, category) ─► paginate (page, per_page) ─► Paginator controls
//! ```
//!
//! Every step is a pure function of its inputs. Callers own the
//! [`SearchState`] and [`PaginationState`] and pass them in on each request.

mod error;
mod filter;
mod page;
mod pagination;

pub use error::CatalogError;
pub use filter::{
    FilterOptions, FilterOutcome, MAX_TERM_LENGTH, SearchState, filter, fold_case, validate_term,
};
pub use page::{Page, paginate};
pub use pagination::{Control, PaginationState, Paginator, PaginatorOptions, compute_controls};
