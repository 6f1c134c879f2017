//! Category types and category display names.

use crate::error::CatalogError;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Slug of the catch-all "every category" selection.
pub const ALL_CATEGORIES: &str = "all";

/// Label shown for the catch-all selection and for any slug the display
/// table does not know.
pub const ALL_JEWELRY: &str = "All Jewelry";

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug (unique). Used as the filter key.
    pub slug: String,
    /// Icon name or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Category image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Sort key, ascending.
    #[serde(default)]
    pub display_order: i64,
}

impl Category {
    /// Create a category with no icon or image.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            icon: None,
            image_url: None,
            display_order: 0,
        }
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(icon) = patch.icon {
            self.icon = Some(icon);
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(display_order) = patch.display_order {
            self.display_order = display_order;
        }
    }
}

/// Insert shape for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i64,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_slug(&self.slug)?;
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("category name is empty".to_string()));
        }
        Ok(())
    }

    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
            icon: self.icon,
            image_url: self.image_url,
            display_order: self.display_order,
        }
    }
}

/// Partial category update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl CategoryPatch {
    pub fn validate(&self) -> Result<(), CatalogError> {
        match &self.slug {
            Some(slug) => validate_slug(slug),
            None => Ok(()),
        }
    }
}

/// `all` is reserved for the catch-all selection and can never name a real
/// category.
fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    if slug.trim().is_empty() {
        return Err(CatalogError::Validation("category slug is empty".to_string()));
    }
    if slug == ALL_CATEGORIES {
        return Err(CatalogError::Validation(format!(
            "category slug '{}' is reserved",
            ALL_CATEGORIES
        )));
    }
    Ok(())
}

/// Display name for a category slug, used as the catalog page title.
///
/// This is a fixed table. It does not consult `Category::name`, so renaming
/// a category record leaves the title unchanged; unknown slugs (including
/// categories created after the table was written) read as "All Jewelry".
pub fn resolve_category_display_name(slug: &str) -> &'static str {
    match slug {
        "necklaces" => "Necklaces",
        "earrings" => "Earrings",
        "rings" => "Rings",
        "bracelets" => "Bracelets",
        "bangles" => "Bangles",
        "pendants" => "Pendants",
        "sets" => "Jewelry Sets",
        _ => ALL_JEWELRY,
    }
}

/// One entry in the category navigation strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub slug: String,
    pub name: String,
}

impl CategoryOption {
    pub fn is_all(&self) -> bool {
        self.slug == ALL_CATEGORIES
    }
}

/// Navigation options: the catch-all entry first, then the fetched
/// categories in the order given.
pub fn category_options(categories: &[Category]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        slug: ALL_CATEGORIES.to_string(),
        name: ALL_JEWELRY.to_string(),
    })
    .chain(categories.iter().map(|c| CategoryOption {
        slug: c.slug.clone(),
        name: c.name.clone(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slugs_resolve() {
        assert_eq!(resolve_category_display_name("rings"), "Rings");
        assert_eq!(resolve_category_display_name("sets"), "Jewelry Sets");
        assert_eq!(resolve_category_display_name("all"), "All Jewelry");
    }

    #[test]
    fn test_unknown_slug_falls_back_to_all() {
        assert_eq!(resolve_category_display_name("unknown-slug"), ALL_JEWELRY);
        assert_eq!(resolve_category_display_name("Rings"), ALL_JEWELRY);
    }

    #[test]
    fn test_display_name_ignores_category_record_name() {
        // The static table is the source of truth for titles.
        let mut category = Category::new("c1", "Rings", "rings");
        category.apply(CategoryPatch {
            name: Some("Statement Rings".to_string()),
            ..Default::default()
        });
        assert_eq!(category.name, "Statement Rings");
        assert_eq!(resolve_category_display_name(&category.slug), "Rings");
    }

    #[test]
    fn test_category_options_prepend_all() {
        let categories = vec![
            Category::new("c1", "Rings", "rings"),
            Category::new("c2", "Anklets", "anklets"),
        ];
        let options = category_options(&categories);

        assert_eq!(options.len(), 3);
        assert!(options[0].is_all());
        assert_eq!(options[0].name, "All Jewelry");
        assert_eq!(options[2].slug, "anklets");
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut category = Category::new("c1", "Rings", "rings");
        category.apply(CategoryPatch {
            display_order: Some(4),
            ..Default::default()
        });
        assert_eq!(category.name, "Rings");
        assert_eq!(category.display_order, 4);
    }

    #[test]
    fn test_reserved_slug_rejected() {
        let draft = NewCategory {
            name: "Everything".to_string(),
            slug: "all".to_string(),
            icon: None,
            image_url: None,
            display_order: 0,
        };
        assert!(draft.validate().is_err());
    }
}
