//! Storage error types.

use aurum_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur when reading or writing the catalog store.
#[derive(Error, Debug)]
pub enum DbError {
    /// The addressed record does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A category with this slug already exists.
    #[error("Category slug already exists: {0}")]
    DuplicateSlug(String),

    /// The seed file could not be read or parsed.
    #[error("Failed to load seed data: {0}")]
    Seed(String),

    /// The record failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DbError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        DbError::NotFound {
            entity,
            key: key.into(),
        }
    }
}

impl From<CatalogError> for DbError {
    fn from(e: CatalogError) -> Self {
        DbError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Seed(e.to_string())
    }
}

impl From<std::io::Error> for DbError {
    fn from(e: std::io::Error) -> Self {
        DbError::Seed(e.to_string())
    }
}
