//! Seed data for the in-memory store.

use crate::DbError;
use aurum_catalog::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a seed file.
///
/// ```json
/// { "categories": [...], "products": [...], "carousel": [...], "shopInfo": {...} }
/// ```
///
/// Every section is optional. Records must carry their ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub carousel: Vec<CarouselImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_info: Option<ShopInfo>,
}

impl SeedData {
    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DbError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.products.is_empty()
            && self.carousel.is_empty()
            && self.shop_info.is_none()
    }
}
