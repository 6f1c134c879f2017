//! Filter state for the catalog page.

use crate::catalog::{Product, ALL_CATEGORIES};
use crate::error::CatalogError;
use crate::money::Price;
use crate::search::{Facet, FacetFilters};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Upper bound of the price slider and of the default price range.
pub const MAX_PRICE: u64 = 500_000;

/// Which category the catalog is showing.
///
/// `All` is a distinct variant rather than the string `"all"`, so it can
/// never be compared against a product's category slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Slug(String),
}

impl CategorySelection {
    /// Parse a slug, mapping the `"all"` sentinel to [`CategorySelection::All`].
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if slug == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Slug(slug)
        }
    }

    /// Wire form: `"all"` or the slug.
    pub fn as_slug(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Slug(slug) => slug,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// Exact, case-sensitive slug comparison. `All` admits everything.
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Slug(slug) => product.category == *slug,
        }
    }
}

impl FromStr for CategorySelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategorySelection::from_slug(s))
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl Serialize for CategorySelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_slug())
    }
}

impl<'de> Deserialize<'de> for CategorySelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(CategorySelection::from_slug(slug))
    }
}

/// Inclusive price bounds.
///
/// Construction through [`PriceRange::new`] is unchecked: a range with
/// `min > max` is kept as given and simply admits nothing. Use
/// [`PriceRange::checked`] where input comes from a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self {
            min: Price::new(min),
            max: Price::new(max),
        }
    }

    /// Like [`PriceRange::new`] but rejects `min > max`.
    pub fn checked(min: u64, max: u64) -> Result<Self, CatalogError> {
        if min > max {
            return Err(CatalogError::InvalidPriceRange { min, max });
        }
        Ok(Self::new(min, max))
    }

    /// The full slider range, `[0, 500000]`.
    pub const fn full() -> Self {
        Self::new(0, MAX_PRICE)
    }

    /// Both ends inclusive.
    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }

    /// Slider label, e.g. `₹0 - ₹5,00,000`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// The complete set of active filters at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub selected_category: CategorySelection,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub facet_filters: FacetFilters,
}

impl FilterState {
    /// Defaults: every category, no query, full price range, no facets.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategorySelection) -> Self {
        self.selected_category = category;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_facet(mut self, facet: Facet, label: impl Into<String>) -> Self {
        self.facet_filters.select(facet, label);
        self
    }

    /// Whether the text filter is active (query non-blank).
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Whether the product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.selected_category.admits(product)
            && self.matches_query(product)
            && self.price_range.contains(product.price)
            && Facet::ALL
                .iter()
                .all(|facet| self.facet_filters.admits(*facet, product))
    }

    fn matches_query(&self, product: &Product) -> bool {
        if !self.has_search() {
            return true;
        }
        // Blankness is judged on the trimmed query; matching uses it as typed.
        let query = self.search_query.to_lowercase();
        product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product.category.to_lowercase().contains(&query)
    }

    /// Number of dimensions currently narrowing the result.
    pub fn active_filter_count(&self) -> usize {
        let mut count = self.facet_filters.active_count();
        if !self.selected_category.is_all() {
            count += 1;
        }
        if self.has_search() {
            count += 1;
        }
        if !self.price_range.is_full() {
            count += 1;
        }
        count
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
