//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when building catalog values.
///
/// The filter engine itself never fails; these come from parsing and
/// validating user- or client-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Price range with a lower bound above the upper bound.
    #[error("Invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: u64, max: u64 },

    /// Facet name outside purity/weight/stone/gender/occasion.
    #[error("Unknown facet: {0}")]
    UnknownFacet(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}
