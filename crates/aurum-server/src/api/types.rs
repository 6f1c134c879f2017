//! Request and response types that are not catalog records.

use serde::{Deserialize, Serialize};

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Query string of `GET /api/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsQuery {
    /// Category slug; absent or `all` lists every product.
    pub category: Option<String>,
}
