//! Server error types.

use aurum_db::DbError;
use thiserror::Error;

/// Errors that stop the server from starting or running.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The configuration could not be read, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog store could not be prepared.
    #[error("Store error: {0}")]
    Store(#[from] DbError),
}
