//! Remote data cache for the Aurum storefront.
//!
//! A [`QueryClient`] keeps one entry per [`QueryKey`] (products per
//! category, categories, carousel, shop info) with its data, a loading
//! flag and the last error. Concurrent requests for the same key share a
//! single fetch; switching category re-keys the [`ProductFeed`], which
//! triggers a fetch for the new key.
//!
//! Data comes from a [`Fetcher`]: [`HttpFetcher`] talks to the REST API,
//! [`StoreFetcher`] reads a [`CatalogStore`](aurum_db::CatalogStore)
//! in-process.
//!
//! # Example
//!
//! ```rust,ignore
//! use aurum_query::prelude::*;
//!
//! let fetcher = HttpFetcher::new("http://127.0.0.1:5000", Duration::from_secs(10))?;
//! let client = QueryClient::new(Arc::new(fetcher));
//!
//! let mut feed = ProductFeed::new(client.clone());
//! feed.select(&"rings".parse()?);
//! let rings = feed.load().await?;
//! ```

mod client;
mod error;
mod fetcher;
mod key;

pub use client::{ProductFeed, QueryClient, QueryState};
pub use error::{FetchError, QueryError};
pub use fetcher::{Fetcher, HttpFetcher, StoreFetcher};
pub use key::QueryKey;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FetchError, Fetcher, HttpFetcher, ProductFeed, QueryClient, QueryError, QueryKey,
        QueryState, StoreFetcher,
    };
}
