//! Filtering, searching and the derived catalog view.

mod debounce;
mod engine;
mod facet;
mod filter;
mod session;
mod view;

pub use debounce::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use engine::derive_visible_products;
pub use facet::{Facet, FacetFilters};
pub use filter::{CategorySelection, FilterState, PriceRange, MAX_PRICE};
pub use session::CatalogSession;
pub use view::{summary_line, CatalogView, LOAD_MORE_THRESHOLD};
