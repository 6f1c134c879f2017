//! Query keys.

use aurum_catalog::catalog::ALL_CATEGORIES;
use aurum_catalog::search::CategorySelection;
use std::fmt;

/// Identifies one remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Products, optionally for one category.
    Products { category: Option<String> },
    Categories,
    Carousel,
    ShopInfo,
}

impl QueryKey {
    /// Products key for a category selection. `All` maps to the
    /// unparameterized listing.
    pub fn products(selection: &CategorySelection) -> Self {
        match selection {
            CategorySelection::All => QueryKey::Products { category: None },
            CategorySelection::Slug(slug) => QueryKey::Products {
                category: Some(slug.clone()),
            },
        }
    }

    /// API path for this key, relative to the server root.
    pub fn path(&self) -> &'static str {
        match self {
            QueryKey::Products { .. } => "/api/products",
            QueryKey::Categories => "/api/categories",
            QueryKey::Carousel => "/api/carousel",
            QueryKey::ShopInfo => "/api/shop-info",
        }
    }

    /// Query-string parameter for this key, unencoded. A blank or `all`
    /// category means the unfiltered listing and has none.
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match self {
            QueryKey::Products {
                category: Some(slug),
            } if !slug.is_empty() && slug != ALL_CATEGORIES => Some(("category", slug.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Products {
                category: Some(slug),
            } => write!(f, "products:{}", slug),
            QueryKey::Products { category: None } => f.write_str("products"),
            QueryKey::Categories => f.write_str("categories"),
            QueryKey::Carousel => f.write_str("carousel"),
            QueryKey::ShopInfo => f.write_str("shop-info"),
        }
    }
}
