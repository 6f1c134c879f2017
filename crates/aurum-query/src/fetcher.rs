//! Data sources for the query client.

use crate::{FetchError, QueryKey};
use async_trait::async_trait;
use aurum_db::{CatalogStore, DbError};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Resolves a query key to its JSON payload.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, key: &QueryKey) -> Result<Value, FetchError>;
}

/// Fetches from the storefront REST API.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Client for the API rooted at `base_url` (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, key: &QueryKey) -> String {
        format!("{}{}", self.base_url, key.path())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, key: &QueryKey) -> Result<Value, FetchError> {
        let url = self.url(key);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(param) = key.query() {
            request = request.query(&[param]);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.clone())
            } else {
                FetchError::Connection(format!("{}: {}", url, e))
            }
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND && *key == QueryKey::ShopInfo {
            return Err(FetchError::NotFound(key.to_string()));
        }
        if status.as_u16() >= 400 {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

/// Fetches straight from a [`CatalogStore`], for in-process use.
#[derive(Clone)]
pub struct StoreFetcher {
    store: Arc<dyn CatalogStore>,
}

impl StoreFetcher {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, FetchError> {
    serde_json::to_value(value).map_err(|e| FetchError::Deserialization(e.to_string()))
}

fn store_error(e: DbError) -> FetchError {
    FetchError::Store(e.to_string())
}

#[async_trait]
impl Fetcher for StoreFetcher {
    async fn fetch(&self, key: &QueryKey) -> Result<Value, FetchError> {
        match key {
            QueryKey::Products { category } => {
                to_json(self.store.products(category.as_deref()).await.map_err(store_error)?)
            }
            QueryKey::Categories => to_json(self.store.categories().await.map_err(store_error)?),
            QueryKey::Carousel => {
                to_json(self.store.carousel_images().await.map_err(store_error)?)
            }
            QueryKey::ShopInfo => match self.store.shop_info().await.map_err(store_error)? {
                Some(info) => to_json(info),
                None => Err(FetchError::NotFound(key.to_string())),
            },
        }
    }
}
