//! Catalog records.
//!
//! Contains products, categories, carousel slides, and the shop contact card.

mod carousel;
mod category;
mod product;
mod shop;

pub use carousel::{CarouselImage, NewCarouselImage};
pub use category::{
    category_options, resolve_category_display_name, Category, CategoryOption, CategoryPatch,
    NewCategory, ALL_CATEGORIES, ALL_JEWELRY,
};
pub use product::{NewProduct, Product, ProductBadge};
pub use shop::{NewShopInfo, ShopInfo};
