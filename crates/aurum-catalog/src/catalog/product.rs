//! Product types.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A jewelry item in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price. Present only when the item is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Primary image URL.
    pub image_url: String,
    /// Category slug. Not checked against the category collection.
    pub category: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Featured ("new") flag.
    #[serde(default)]
    pub featured: bool,
    /// Stock flag.
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Sort key, ascending.
    #[serde(default)]
    pub display_order: i64,
    /// Purity / karat label, e.g. "22K".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
    /// Weight band label, e.g. "5g-10g".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Stone / gem label, e.g. "Diamond".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone: Option<String>,
    /// Target wearer, e.g. "Women".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Occasion label, e.g. "Bridal".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductBadge {
    /// Featured item.
    New,
    /// Discounted item.
    Sale,
}

impl ProductBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProductBadge::New => "NEW",
            ProductBadge::Sale => "SALE",
        }
    }
}

impl Product {
    /// Create a product with the required fields and defaults for the rest.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: Price::new(price),
            original_price: None,
            image_url: String::new(),
            category: category.into(),
            tags: Vec::new(),
            featured: false,
            in_stock: true,
            display_order: 0,
            purity: None,
            weight: None,
            stone: None,
            gender: None,
            occasion: None,
        }
    }

    /// Card badge. The sale badge sits in the same spot as the featured one
    /// and wins when both apply.
    pub fn badge(&self) -> Option<ProductBadge> {
        if self.original_price.is_some() {
            Some(ProductBadge::Sale)
        } else if self.featured {
            Some(ProductBadge::New)
        } else {
            None
        }
    }

    /// Whether the product carries a discount.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Percentage off the original price, when there is a real discount.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price
            .and_then(|original| self.price.discount_percent(original))
    }

    /// Availability label for the details view.
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

/// Insert shape for a product (no id yet).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

impl NewProduct {
    /// Reject records the storefront cannot show.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("product name is empty".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product category is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Attach an id, producing the stored record.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            image_url: self.image_url,
            category: self.category,
            tags: self.tags,
            featured: self.featured,
            in_stock: self.in_stock,
            display_order: self.display_order,
            purity: self.purity,
            weight: self.weight,
            stone: self.stone,
            gender: self.gender,
            occasion: self.occasion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_applies_defaults() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Gold Ring",
            "price": 1000,
            "imageUrl": "/img/ring.jpg",
            "category": "rings"
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.description, "");
        assert!(product.tags.is_empty());
        assert!(!product.featured);
        assert!(product.in_stock);
        assert_eq!(product.display_order, 0);
        assert!(product.stone.is_none());
    }

    #[test]
    fn test_id_alias_accepted() {
        let product: Product = serde_json::from_value(json!({
            "id": "p2",
            "name": "Chain",
            "price": 5,
            "imageUrl": "",
            "category": "necklaces"
        }))
        .unwrap();
        assert_eq!(product.id.as_str(), "p2");
    }

    #[test]
    fn test_serializes_camel_case_with_underscore_id() {
        let mut product = Product::new("p3", "Bangle", 2500, "bangles");
        product.original_price = Some(Price::new(3000));
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["_id"], "p3");
        assert_eq!(value["originalPrice"], 3000);
        assert_eq!(value["inStock"], true);
        assert!(value.get("stone").is_none());
    }

    #[test]
    fn test_badges() {
        let mut product = Product::new("p", "Ring", 100, "rings");
        assert_eq!(product.badge(), None);

        product.featured = true;
        assert_eq!(product.badge(), Some(ProductBadge::New));

        product.original_price = Some(Price::new(200));
        assert_eq!(product.badge(), Some(ProductBadge::Sale));
        assert_eq!(product.discount_percent(), Some(50));
    }

    #[test]
    fn test_stock_label() {
        let mut product = Product::new("p", "Ring", 100, "rings");
        assert_eq!(product.stock_label(), "In Stock");
        product.in_stock = false;
        assert_eq!(product.stock_label(), "Out of Stock");
    }

    #[test]
    fn test_new_product_validation() {
        let draft: NewProduct = serde_json::from_value(json!({
            "name": "  ",
            "price": 10,
            "imageUrl": "",
            "category": "rings"
        }))
        .unwrap();
        assert!(draft.validate().is_err());

        let draft = NewProduct {
            name: "Pearl Studs".to_string(),
            ..draft
        };
        assert!(draft.validate().is_ok());

        let product = draft.into_product(ProductId::new("x"));
        assert!(product.in_stock);
        assert_eq!(product.name, "Pearl Studs");
    }
}
