//! In-memory document store.

use crate::{CatalogStore, DbError, SeedData};
use async_trait::async_trait;
use aurum_catalog::catalog::ALL_CATEGORIES;
use aurum_catalog::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Collections {
    categories: Vec<Category>,
    products: Vec<Product>,
    carousel: Vec<CarouselImage>,
    shop_info: Option<ShopInfo>,
}

impl Collections {
    fn slug_taken(&self, slug: &str, except: Option<&CategoryId>) -> bool {
        self.categories
            .iter()
            .any(|c| c.slug == slug && Some(&c.id) != except)
    }
}

/// A [`CatalogStore`] that keeps every collection in memory.
///
/// Records are held in insertion order; listings sort on the way out.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated from seed data.
    ///
    /// Fails if two seeded categories share a slug.
    pub fn with_seed(seed: SeedData) -> Result<Self, DbError> {
        let mut collections = Collections::default();
        for category in seed.categories {
            if collections.slug_taken(&category.slug, None) {
                return Err(DbError::DuplicateSlug(category.slug));
            }
            collections.categories.push(category);
        }
        collections.products = seed.products;
        collections.carousel = seed.carousel;
        collections.shop_info = seed.shop_info;

        info!(
            categories = collections.categories.len(),
            products = collections.products.len(),
            carousel = collections.carousel.len(),
            shop_info = collections.shop_info.is_some(),
            "Seeded catalog store"
        );

        Ok(Self {
            inner: RwLock::new(collections),
        })
    }
}

fn sorted_by_display_order<T: Clone>(items: &[T], key: impl Fn(&T) -> i64) -> Vec<T> {
    let mut items = items.to_vec();
    // `sort_by_key` is stable, so ties keep insertion order.
    items.sort_by_key(|item| key(item));
    items
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        let inner = self.inner.read().await;
        Ok(sorted_by_display_order(&inner.categories, |c| c.display_order))
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, DbError> {
        category.validate()?;
        let mut inner = self.inner.write().await;
        if inner.slug_taken(&category.slug, None) {
            return Err(DbError::DuplicateSlug(category.slug));
        }

        let category = category.into_category(CategoryId::generate());
        debug!(id = %category.id, slug = %category.slug, "Created category");
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        slug: &str,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, DbError> {
        patch.validate()?;
        let mut inner = self.inner.write().await;
        let id = match inner.categories.iter().find(|c| c.slug == slug) {
            Some(category) => category.id.clone(),
            None => return Ok(None),
        };
        if let Some(new_slug) = &patch.slug {
            if inner.slug_taken(new_slug, Some(&id)) {
                return Err(DbError::DuplicateSlug(new_slug.clone()));
            }
        }

        let category = inner
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DbError::not_found("Category", slug))?;
        category.apply(patch);
        debug!(id = %category.id, slug = %category.slug, "Updated category");
        Ok(Some(category.clone()))
    }

    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, DbError> {
        let inner = self.inner.read().await;
        // Blank behaves like `all`: no category filter.
        let category = category.filter(|slug| !slug.is_empty() && *slug != ALL_CATEGORIES);
        let matching: Vec<Product> = inner
            .products
            .iter()
            .filter(|p| category.map_or(true, |slug| p.category == slug))
            .cloned()
            .collect();
        Ok(sorted_by_display_order(&matching, |p| p.display_order))
    }

    async fn product_by_id(&self, id: &str) -> Result<Option<Product>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.products.iter().find(|p| p.id.as_str() == id).cloned())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError> {
        product.validate()?;
        let product = product.into_product(ProductId::generate());
        debug!(id = %product.id, category = %product.category, "Created product");
        self.inner.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn carousel_images(&self) -> Result<Vec<CarouselImage>, DbError> {
        let inner = self.inner.read().await;
        let active: Vec<CarouselImage> =
            inner.carousel.iter().filter(|i| i.active).cloned().collect();
        Ok(sorted_by_display_order(&active, |i| i.display_order))
    }

    async fn create_carousel_image(
        &self,
        image: NewCarouselImage,
    ) -> Result<CarouselImage, DbError> {
        image.validate()?;
        let image = image.into_image(CarouselImageId::generate());
        debug!(id = %image.id, active = image.active, "Created carousel image");
        self.inner.write().await.carousel.push(image.clone());
        Ok(image)
    }

    async fn shop_info(&self) -> Result<Option<ShopInfo>, DbError> {
        Ok(self.inner.read().await.shop_info.clone())
    }

    async fn upsert_shop_info(&self, info: NewShopInfo) -> Result<ShopInfo, DbError> {
        info.validate()?;
        let mut inner = self.inner.write().await;
        let id = match &inner.shop_info {
            Some(existing) => existing.id.clone(),
            None => ShopInfoId::generate(),
        };
        let info = info.into_shop_info(id);
        debug!(id = %info.id, "Saved shop info");
        inner.shop_info = Some(info.clone());
        Ok(info)
    }
}
