//! Page-level coordinator for the catalog.

use crate::catalog::Product;
use crate::search::{
    CatalogView, CategorySelection, Facet, FilterState, PriceRange, SearchDebouncer,
};
use std::time::{Duration, Instant};

/// Owns the filter state for one catalog session.
///
/// Every user interaction replaces one slice of [`FilterState`]; the view
/// is derived from scratch on each call to [`CatalogSession::view`].
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    state: FilterState,
    search: SearchDebouncer,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom search debounce window.
    pub fn with_debounce(window: Duration) -> Self {
        Self {
            state: FilterState::default(),
            search: SearchDebouncer::new(window),
        }
    }

    /// Start from an existing state (e.g. parsed from CLI flags).
    pub fn with_state(mut self, state: FilterState) -> Self {
        self.search.sync(state.search_query.clone());
        self.state = state;
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Text in the search box, which may be ahead of the committed query.
    pub fn draft_query(&self) -> &str {
        self.search.draft()
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Category click. Returns whether the selection changed.
    pub fn select_category(&mut self, category: CategorySelection) -> bool {
        if self.state.selected_category == category {
            return false;
        }
        self.state.selected_category = category;
        true
    }

    /// Keystroke in the search box. The committed query follows on
    /// [`CatalogSession::tick`].
    pub fn type_query(&mut self, text: impl Into<String>, now: Instant) {
        self.search.edit(text, now);
    }

    /// Commit the debounced query if due. Returns whether the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(query) if query != self.state.search_query => {
                self.state.search_query = query;
                true
            }
            _ => false,
        }
    }

    /// The clear button: empties both the draft and the committed query.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.state.search_query.clear();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.state.price_range = range;
    }

    /// Facet checkbox handler.
    pub fn toggle_facet(&mut self, facet: Facet, label: &str, checked: bool) {
        self.state.facet_filters.set(facet, label, checked);
    }

    /// Reset from the filter drawer: price and facets go back to defaults;
    /// category and search are left alone.
    pub fn reset_filters(&mut self) {
        self.state.price_range = PriceRange::default();
        self.state.facet_filters.clear();
    }

    /// Derive the view for the given products.
    pub fn view<'a>(&self, products: Option<&'a [Product]>, is_loading: bool) -> CatalogView<'a> {
        CatalogView::build(products, &self.state, is_loading)
    }
}
