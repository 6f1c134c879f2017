//! Jewelry catalog domain types and client-side filtering for Aurum.
//!
//! This crate holds everything the storefront needs that does not touch the
//! network or the database:
//!
//! - **Catalog**: Products, categories, carousel slides, shop info
//! - **Search**: Filter state, facet selections, the filter engine
//! - **View**: Display metadata for a rendered catalog page
//! - **Session**: The page-level coordinator that owns the filter state
//!
//! # Example
//!
//! ```rust,ignore
//! use aurum_catalog::prelude::*;
//!
//! let mut session = CatalogSession::new();
//! session.select_category("rings".parse()?);
//! session.toggle_facet(Facet::Stone, "Diamond", true);
//!
//! let view = session.view(Some(&products), false);
//! println!("{} - {}", view.title, view.summary);
//! for product in &view.products {
//!     println!("{} {}", product.name, product.price);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{format_inr, Price};

    // Catalog
    pub use crate::catalog::{
        category_options, resolve_category_display_name, CarouselImage, Category,
        CategoryOption, CategoryPatch, NewCarouselImage, NewCategory, NewProduct, NewShopInfo,
        Product, ProductBadge, ShopInfo,
    };

    // Search
    pub use crate::search::{
        derive_visible_products, summary_line, CatalogSession, CatalogView, CategorySelection,
        Facet, FacetFilters, FilterState, PriceRange, SearchDebouncer, LOAD_MORE_THRESHOLD,
        MAX_PRICE,
    };
}
