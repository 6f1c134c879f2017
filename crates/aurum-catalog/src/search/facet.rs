//! Facets and facet selections.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Purity,
    Weight,
    Stone,
    Gender,
    Occasion,
}

impl Facet {
    /// Every facet, in the order the filter drawer lists them.
    pub const ALL: [Facet; 5] = [
        Facet::Purity,
        Facet::Weight,
        Facet::Stone,
        Facet::Gender,
        Facet::Occasion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Purity => "purity",
            Facet::Weight => "weight",
            Facet::Stone => "stone",
            Facet::Gender => "gender",
            Facet::Occasion => "occasion",
        }
    }

    /// Heading shown above the facet's checkboxes.
    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Purity => "Purity / Karat",
            Facet::Weight => "Weight Range",
            Facet::Stone => "Stone / Gem",
            Facet::Gender => "Gender",
            Facet::Occasion => "Occasion",
        }
    }

    /// Labels offered as checkboxes. Products are not validated against
    /// this list.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Facet::Purity => &["22K", "18K", "14K", "24K"],
            Facet::Weight => &["<5g", "5g-10g", "10g-20g", "20g+"],
            Facet::Stone => &["Diamond", "Emerald", "Ruby", "Sapphire", "Pearl", "None"],
            Facet::Gender => &["Men", "Women", "Kids"],
            Facet::Occasion => &["Daily Wear", "Bridal", "Office Wear", "Festive"],
        }
    }

    /// The product's label for this facet, if it has one.
    pub fn value_of<'a>(&self, product: &'a Product) -> Option<&'a str> {
        let value = match self {
            Facet::Purity => &product.purity,
            Facet::Weight => &product.weight,
            Facet::Stone => &product.stone,
            Facet::Gender => &product.gender,
            Facet::Occasion => &product.occasion,
        };
        value.as_deref()
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "purity" => Ok(Facet::Purity),
            "weight" => Ok(Facet::Weight),
            "stone" => Ok(Facet::Stone),
            "gender" => Ok(Facet::Gender),
            "occasion" => Ok(Facet::Occasion),
            _ => Err(CatalogError::UnknownFacet(s.to_string())),
        }
    }
}

/// Selected labels per facet.
///
/// A facet with no selected labels places no restriction on products. It
/// does not mean "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetFilters {
    selections: BTreeMap<Facet, BTreeSet<String>>,
}

impl FacetFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection, mostly for tests and CLI parsing.
    pub fn with(mut self, facet: Facet, label: impl Into<String>) -> Self {
        self.select(facet, label);
        self
    }

    /// Labels selected for a facet (empty when none).
    pub fn selected(&self, facet: Facet) -> impl Iterator<Item = &str> {
        self.selections
            .get(&facet)
            .into_iter()
            .flat_map(|labels| labels.iter().map(String::as_str))
    }

    /// Whether any label is selected for the facet.
    pub fn is_active(&self, facet: Facet) -> bool {
        self.selections
            .get(&facet)
            .is_some_and(|labels| !labels.is_empty())
    }

    pub fn is_selected(&self, facet: Facet, label: &str) -> bool {
        self.selections
            .get(&facet)
            .is_some_and(|labels| labels.contains(label))
    }

    /// Add a label. Selecting an already selected label is a no-op.
    pub fn select(&mut self, facet: Facet, label: impl Into<String>) {
        self.selections.entry(facet).or_default().insert(label.into());
    }

    /// Remove a label. Empty sets are dropped so equality stays structural.
    pub fn deselect(&mut self, facet: Facet, label: &str) {
        if let Some(labels) = self.selections.get_mut(&facet) {
            labels.remove(label);
            if labels.is_empty() {
                self.selections.remove(&facet);
            }
        }
    }

    /// Checkbox handler: select when checked, deselect otherwise.
    pub fn set(&mut self, facet: Facet, label: &str, checked: bool) {
        if checked {
            self.select(facet, label);
        } else {
            self.deselect(facet, label);
        }
    }

    /// Drop every selection for one facet.
    pub fn clear_facet(&mut self, facet: Facet) {
        self.selections.remove(&facet);
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// No facet is restricting.
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// Number of facets with at least one label selected.
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().filter(|f| self.is_active(**f)).count()
    }

    /// Whether the product passes this facet's selection.
    pub fn admits(&self, facet: Facet, product: &Product) -> bool {
        let labels = match self.selections.get(&facet) {
            Some(labels) => labels,
            None => return true,
        };
        if labels.is_empty() {
            return true;
        }
        match facet.value_of(product) {
            Some(value) => labels.contains(value),
            None => false,
        }
    }
}
