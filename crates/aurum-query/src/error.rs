//! Fetch and query error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// Cloneable: one failed request is reported to every caller that was
/// waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Errors surfaced by the query client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The fetcher failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The cached payload does not have the requested shape.
    #[error("Failed to decode cached data: {0}")]
    Decode(String),
}

impl QueryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::Fetch(FetchError::NotFound(_)))
    }
}
