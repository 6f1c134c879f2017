//! The storage contract.

use crate::DbError;
use async_trait::async_trait;
use aurum_catalog::prelude::*;

/// Persistence operations the storefront API needs.
///
/// Listings come back sorted by `display_order` ascending, ties in insertion
/// order. Lookups that miss return `Ok(None)`; the caller decides whether
/// that is a 404 or a 400.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, DbError>;

    /// Insert a category. Slugs are unique.
    async fn create_category(&self, category: NewCategory) -> Result<Category, DbError>;

    /// Apply a partial update to the category with this slug.
    async fn update_category(
        &self,
        slug: &str,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, DbError>;

    /// Products, optionally restricted to one category slug. `None` and
    /// `Some("all")` both mean every product.
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, DbError>;

    async fn product_by_id(&self, id: &str) -> Result<Option<Product>, DbError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError>;

    /// Active carousel slides only.
    async fn carousel_images(&self) -> Result<Vec<CarouselImage>, DbError>;

    async fn create_carousel_image(
        &self,
        image: NewCarouselImage,
    ) -> Result<CarouselImage, DbError>;

    /// The shop contact card, if one has been saved.
    async fn shop_info(&self) -> Result<Option<ShopInfo>, DbError>;

    /// Create the contact card, or overwrite it keeping its id.
    async fn upsert_shop_info(&self, info: NewShopInfo) -> Result<ShopInfo, DbError>;
}
