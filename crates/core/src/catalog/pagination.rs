//! Pagination controls: which page links, ellipses and prev/next buttons to
//! render for a given position.

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A single renderable pagination affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Link to the previous page.
    Prev { enabled: bool },
    /// Link to a numbered page. `active` marks the current page.
    PageNumber { number: u32, active: bool },
    /// A gap between page numbers.
    Ellipsis,
    /// Link to the next page.
    Next { enabled: bool },
}

impl Control {
    /// The page this control navigates to, given the current page.
    ///
    /// Returns `None` for ellipses, disabled buttons and the active page.
    #[must_use]
    pub const fn target(&self, current_page: u32) -> Option<u32> {
        match *self {
            Self::Prev { enabled: true } => Some(current_page.saturating_sub(1)),
            Self::Next { enabled: true } => Some(current_page.saturating_add(1)),
            Self::PageNumber {
                number,
                active: false,
            } => Some(number),
            _ => None,
        }
    }
}

/// Where the shopper is in a paged result set.
///
/// Invariant: `current_page >= 1`, and `current_page <= total_pages`
/// whenever `total_pages > 0`. With zero pages the only valid position is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl PaginationState {
    /// Create a state, checking the invariant.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if `current_page` is zero or
    /// past the last page.
    pub fn new(current_page: u32, total_pages: u32) -> Result<Self, CatalogError> {
        if current_page == 0 {
            return Err(CatalogError::invalid("current page must be at least 1"));
        }
        if current_page > total_pages.max(1) {
            return Err(CatalogError::invalid(format!(
                "current page {current_page} exceeds total pages {total_pages}"
            )));
        }
        Ok(Self {
            current_page,
            total_pages,
        })
    }

    /// The first page of a result set with `total_pages` pages.
    #[must_use]
    pub const fn first(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current_page == 1
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Handle a page-change request.
    ///
    /// The request is rejected rather than clamped so the caller can decide
    /// whether to clamp, ignore it, or tell the shopper.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfRange` if `target` is outside
    /// `1..=total_pages` (or is not 1 when there are no pages).
    pub fn request_page(&self, target: u32) -> Result<Self, CatalogError> {
        let last = if self.total_pages == 0 {
            1
        } else {
            self.total_pages
        };
        if target == 0 || target > last {
            return Err(CatalogError::OutOfRange {
                requested: target,
                total_pages: self.total_pages,
            });
        }
        Ok(Self {
            current_page: target,
            total_pages: self.total_pages,
        })
    }
}

/// Paginator behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorOptions {
    /// Render nothing when there is exactly one page. When `false`, a single
    /// page renders as disabled prev/next around the active page 1.
    /// Defaults to `true`.
    pub hide_single_page: bool,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            hide_single_page: true,
        }
    }
}

/// Stateless renderer of pagination controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    options: PaginatorOptions,
}

impl Paginator {
    #[must_use]
    pub const fn new(options: PaginatorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> PaginatorOptions {
        self.options
    }

    /// Controls for a state, in display order.
    ///
    /// The current page is flanked by its neighbours. The first and last
    /// pages are always reachable, with an ellipsis standing in for any gap
    /// of more than one page.
    #[must_use]
    pub fn controls(&self, state: PaginationState) -> Vec<Control> {
        let current = state.current_page;
        let total = state.total_pages;

        if total == 0 || (total == 1 && self.options.hide_single_page) {
            return Vec::new();
        }

        let mut controls = Vec::with_capacity(9);
        controls.push(Control::Prev {
            enabled: !state.is_first(),
        });

        if current > 2 {
            controls.push(Control::PageNumber {
                number: 1,
                active: false,
            });
        }
        if current > 3 {
            controls.push(Control::Ellipsis);
        }
        if current > 1 {
            controls.push(Control::PageNumber {
                number: current - 1,
                active: false,
            });
        }

        controls.push(Control::PageNumber {
            number: current,
            active: true,
        });

        if current < total {
            controls.push(Control::PageNumber {
                number: current + 1,
                active: false,
            });
        }
        if current.saturating_add(2) < total {
            controls.push(Control::Ellipsis);
        }
        if current.saturating_add(1) < total {
            controls.push(Control::PageNumber {
                number: total,
                active: false,
            });
        }

        controls.push(Control::Next {
            enabled: !state.is_last(),
        });

        controls
    }

    /// Validate raw page numbers and compute the controls.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if the pair violates the
    /// [`PaginationState`] invariant.
    pub fn compute(&self, current_page: u32, total_pages: u32) -> Result<Vec<Control>, CatalogError> {
        let state = PaginationState::new(current_page, total_pages)?;
        Ok(self.controls(state))
    }

    /// Handle a page-change request; see [`PaginationState::request_page`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfRange` for a target outside the page range.
    pub fn on_page_change(
        &self,
        state: PaginationState,
        target: u32,
    ) -> Result<PaginationState, CatalogError> {
        state.request_page(target)
    }
}

/// Controls for `(current_page, total_pages)` with default options.
///
/// ```
/// use bazaar_core::{compute_controls, Control};
///
/// let controls = compute_controls(2, 2).unwrap();
/// assert_eq!(
///     controls,
///     [
///         Control::Prev { enabled: true },
///         Control::PageNumber { number: 1, active: false },
///         Control::PageNumber { number: 2, active: true },
///         Control::Next { enabled: false },
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns `CatalogError::InvalidArgument` if the pair violates the
/// [`PaginationState`] invariant.
pub fn compute_controls(current_page: u32, total_pages: u32) -> Result<Vec<Control>, CatalogError> {
    Paginator::default().compute(current_page, total_pages)
}
