//! Fixed-size page slicing of a result set.

use serde::Serialize;

use super::{CatalogError, PaginationState};

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page, in result order.
    pub items: Vec<T>,
    /// Position within the result set.
    pub state: PaginationState,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Page size the result set was sliced with.
    pub per_page: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.state.current_page()
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.state.total_pages()
    }

    /// 1-based positions of the first and last item on this page, for
    /// "showing 13-24 of 40" labels. `None` when the page is empty.
    #[must_use]
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.current_page() as usize - 1) * self.per_page + 1;
        Some((start, start + self.items.len() - 1))
    }

    /// Transform the items, keeping the position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            state: self.state,
            total_items: self.total_items,
            per_page: self.per_page,
        }
    }
}

/// Slice `items` into pages of `per_page` and return page `current_page`.
///
/// An empty result set has zero pages; page 1 of it is valid and empty.
///
/// # Errors
///
/// - `CatalogError::InvalidArgument` if `per_page` is zero
/// - `CatalogError::OutOfRange` if `current_page` is outside the page range
pub fn paginate<T>(
    items: Vec<T>,
    current_page: u32,
    per_page: usize,
) -> Result<Page<T>, CatalogError> {
    if per_page == 0 {
        return Err(CatalogError::invalid("per_page must be at least 1"));
    }

    let total_items = items.len();
    let total_pages = u32::try_from(total_items.div_ceil(per_page))
        .map_err(|_| CatalogError::invalid("result set has too many pages"))?;
    let state = PaginationState::first(total_pages).request_page(current_page)?;

    let skip = (current_page as usize - 1).saturating_mul(per_page);
    let items = items.into_iter().skip(skip).take(per_page).collect();

    Ok(Page {
        items,
        state,
        total_items,
        per_page,
    })
}
