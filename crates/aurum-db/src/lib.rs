//! Catalog storage for Aurum.
//!
//! Defines the [`CatalogStore`] contract the HTTP API is written against,
//! and [`MemoryStore`], a document store that keeps every collection in
//! memory and can be seeded from a JSON file.
//!
//! # Example
//!
//! ```rust,ignore
//! use aurum_db::prelude::*;
//!
//! let seed = SeedData::load("seed.json").await?;
//! let store = MemoryStore::with_seed(seed)?;
//!
//! let rings = store.products(Some("rings")).await?;
//! let categories = store.categories().await?;
//! ```

mod error;
mod memory;
mod seed;
mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use seed::SeedData;
pub use store::CatalogStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogStore, DbError, MemoryStore, SeedData};
}
