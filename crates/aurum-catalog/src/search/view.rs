//! Display metadata for a rendered catalog page.

use crate::catalog::{resolve_category_display_name, Product};
use crate::search::{derive_visible_products, FilterState};
use serde::Serialize;

/// Result count at which the (inert) "load more" control appears.
pub const LOAD_MORE_THRESHOLD: usize = 8;

/// Everything a view needs to render the product grid.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Section title, from the static category table.
    pub title: &'static str,
    /// Visible products, in input order.
    pub products: Vec<&'a Product>,
    /// Number of visible products.
    pub count: usize,
    /// One-line summary under the title.
    pub summary: String,
    /// Longer message for the empty grid, if the grid is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    /// Whether the "load more" button is shown.
    pub show_load_more: bool,
    /// Data for the current products key is still loading.
    pub is_loading: bool,
}

impl<'a> CatalogView<'a> {
    /// Run the filter engine and build the page metadata around it.
    pub fn build(products: Option<&'a [Product]>, state: &FilterState, is_loading: bool) -> Self {
        let visible = derive_visible_products(products, state);
        let count = visible.len();
        // Messages key off the raw query, whitespace included.
        let searching = !state.search_query.is_empty();

        Self {
            title: resolve_category_display_name(state.selected_category.as_slug()),
            summary: summary_line(count, searching),
            empty_message: (count == 0).then(|| empty_message(searching)),
            show_load_more: count >= LOAD_MORE_THRESHOLD,
            is_loading,
            count,
            products: visible,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// "Showing 3 exquisite pieces" and its empty-state variants.
pub fn summary_line(count: usize, searching: bool) -> String {
    match count {
        0 if searching => "No products match your search".to_string(),
        0 => "No products found in this category".to_string(),
        1 => "Showing 1 exquisite piece".to_string(),
        n => format!("Showing {} exquisite pieces", n),
    }
}

fn empty_message(searching: bool) -> &'static str {
    if searching {
        "No products match your search criteria. Try adjusting your filters."
    } else {
        "No products available in this category yet."
    }
}
