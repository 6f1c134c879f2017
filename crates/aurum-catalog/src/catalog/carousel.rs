//! Home page carousel slides.

use crate::error::CatalogError;
use crate::ids::CarouselImageId;
use serde::{Deserialize, Serialize};

/// A carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImage {
    #[serde(rename = "_id", alias = "id")]
    pub id: CarouselImageId,
    pub image_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    /// Inactive slides are stored but never served.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Insert shape for a carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCarouselImage {
    pub image_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NewCarouselImage {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.image_url.trim().is_empty() {
            return Err(CatalogError::Validation("carousel image url is empty".to_string()));
        }
        Ok(())
    }

    pub fn into_image(self, id: CarouselImageId) -> CarouselImage {
        CarouselImage {
            id,
            image_url: self.image_url,
            title: self.title,
            subtitle: self.subtitle,
            button_text: self.button_text,
            button_link: self.button_link,
            display_order: self.display_order,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_defaults_to_true() {
        let draft: NewCarouselImage = serde_json::from_value(json!({
            "imageUrl": "/slides/bridal.jpg",
            "title": "Bridal Collection"
        }))
        .unwrap();
        assert!(draft.active);
        assert_eq!(draft.display_order, 0);

        let image = draft.into_image(CarouselImageId::new("s1"));
        assert_eq!(serde_json::to_value(&image).unwrap()["_id"], "s1");
    }
}
