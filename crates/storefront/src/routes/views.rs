//! Display data for templates, converted from core catalog types.

use bazaar_core::{Category, Control, Product};

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image: ImageView,
    pub category: String,
}

/// Image display data for templates.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Category link for the shop sidebar.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// One rendered pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub label: String,
    /// Link target; `None` for ellipses, disabled buttons and the current page.
    pub href: Option<String>,
    pub active: bool,
    pub ellipsis: bool,
    /// `rel` attribute for prev/next links, empty otherwise.
    pub rel: &'static str,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        // Fall back to the name so every image has alt text
        let alt = if product.image_alt.trim().is_empty() {
            product.name.clone()
        } else {
            product.image_alt.clone()
        };

        Self {
            id: product.id.as_u32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: ImageView {
                url: product.image_url.clone(),
                alt,
            },
            category: product.category.to_string(),
        }
    }
}

impl CategoryView {
    #[must_use]
    pub fn new(category: &Category, href: String, active: Option<&Category>) -> Self {
        Self {
            name: category.name.clone(),
            href,
            active: active.is_some_and(|a| a.id == category.id),
        }
    }
}

impl ControlView {
    /// Render a control, using `href_for` to link to a page number.
    pub fn new(control: Control, current_page: u32, href_for: impl Fn(u32) -> String) -> Self {
        let href = control.target(current_page).map(href_for);
        match control {
            Control::Prev { .. } => Self {
                label: "‹ Prev".to_string(),
                href,
                active: false,
                ellipsis: false,
                rel: "prev",
            },
            Control::Next { .. } => Self {
                label: "Next ›".to_string(),
                href,
                active: false,
                ellipsis: false,
                rel: "next",
            },
            Control::PageNumber { number, active } => Self {
                label: number.to_string(),
                href,
                active,
                ellipsis: false,
                rel: "",
            },
            Control::Ellipsis => Self {
                label: "…".to_string(),
                href: None,
                active: false,
                ellipsis: true,
                rel: "",
            },
        }
    }
}
