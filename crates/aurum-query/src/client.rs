//! Keyed query cache with in-flight de-duplication.

use crate::{Fetcher, QueryError, QueryKey};
use aurum_catalog::prelude::*;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

type Payload = Result<Arc<Value>, QueryError>;
type InFlight = Shared<BoxFuture<'static, Payload>>;

/// What a view sees for one key, without triggering I/O.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    /// The data, or the type's default while nothing has arrived. Views
    /// treat "no data yet" as an empty list.
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

#[derive(Default)]
struct Entry {
    data: Option<Arc<Value>>,
    in_flight: Option<InFlight>,
    error: Option<QueryError>,
}

struct Inner {
    fetcher: Arc<dyn Fetcher>,
    entries: Mutex<HashMap<QueryKey, Entry>>,
}

/// Caches remote collections by [`QueryKey`].
///
/// Concurrent requests for the same key share one fetch. Payloads are kept
/// as JSON and decoded per call, so one client serves every record type.
/// Cloning is cheap and clones share the cache.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

impl QueryClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    // The lock is only ever held for map bookkeeping, never across an await.
    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached data for the key, or the in-flight request's result, or a
    /// fresh fetch.
    pub async fn fetch<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<T, QueryError> {
        let value = self.fetch_value(key).await?;
        decode(&value)
    }

    /// Drop cached data for the key and fetch again.
    pub async fn refetch<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<T, QueryError> {
        if let Some(entry) = self.entries().get_mut(key) {
            entry.data = None;
            entry.in_flight = None;
        }
        self.fetch(key).await
    }

    async fn fetch_value(&self, key: &QueryKey) -> Payload {
        let request = {
            let mut entries = self.entries();
            let entry = entries.entry(key.clone()).or_default();
            if let Some(data) = &entry.data {
                debug!(%key, "Cache hit");
                return Ok(data.clone());
            }
            match &entry.in_flight {
                Some(request) => {
                    debug!(%key, "Joining in-flight request");
                    request.clone()
                }
                None => {
                    debug!(%key, "Cache miss");
                    let request = self.start(key.clone());
                    entry.in_flight = Some(request.clone());
                    request
                }
            }
        };

        let result = request.clone().await;
        self.settle(key, &request, &result);
        result
    }

    fn start(&self, key: QueryKey) -> InFlight {
        let fetcher = self.inner.fetcher.clone();
        async move {
            fetcher
                .fetch(&key)
                .await
                .map(Arc::new)
                .map_err(QueryError::from)
        }
        .boxed()
        .shared()
    }

    /// Record a finished request, unless the entry was invalidated or
    /// restarted while it ran.
    fn settle(&self, key: &QueryKey, request: &InFlight, result: &Payload) {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        if !entry.in_flight.as_ref().is_some_and(|r| r.ptr_eq(request)) {
            return;
        }
        entry.in_flight = None;
        match result {
            Ok(value) => {
                entry.data = Some(value.clone());
                entry.error = None;
            }
            Err(e) => {
                debug!(%key, error = %e, "Query failed");
                entry.error = Some(e.clone());
            }
        }
    }

    /// Current state for the key.
    pub fn snapshot<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let entries = self.entries();
        let Some(entry) = entries.get(key) else {
            return QueryState {
                data: None,
                is_loading: false,
                error: None,
            };
        };

        let (data, decode_error) = match entry.data.as_deref().map(decode::<T>) {
            Some(Ok(data)) => (Some(data), None),
            Some(Err(e)) => (None, Some(e)),
            None => (None, None),
        };
        QueryState {
            data,
            is_loading: entry.in_flight.is_some(),
            error: entry
                .error
                .as_ref()
                .or(decode_error.as_ref())
                .map(ToString::to_string),
        }
    }

    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.entries()
            .get(key)
            .is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Forget everything about the key. A request still running for it
    /// completes for its callers but is not cached.
    pub fn invalidate(&self, key: &QueryKey) {
        if self.entries().remove(key).is_some() {
            debug!(%key, "Invalidated");
        }
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Products for a category selection.
    pub async fn products(&self, selection: &CategorySelection) -> Result<Vec<Product>, QueryError> {
        self.fetch(&QueryKey::products(selection)).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, QueryError> {
        self.fetch(&QueryKey::Categories).await
    }

    pub async fn carousel(&self) -> Result<Vec<CarouselImage>, QueryError> {
        self.fetch(&QueryKey::Carousel).await
    }

    /// The shop contact card; `None` when none has been saved.
    pub async fn shop_info(&self) -> Result<Option<ShopInfo>, QueryError> {
        match self.fetch(&QueryKey::ShopInfo).await {
            Ok(info) => Ok(Some(info)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, QueryError> {
    T::deserialize(value).map_err(|e| QueryError::Decode(e.to_string()))
}

/// Products for the current category selection, re-keyed when the
/// selection changes.
#[derive(Clone)]
pub struct ProductFeed {
    client: QueryClient,
    key: QueryKey,
}

impl ProductFeed {
    pub fn new(client: QueryClient) -> Self {
        Self {
            client,
            key: QueryKey::products(&CategorySelection::All),
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Point the feed at a category. Returns whether the key changed, i.e.
    /// whether the next [`ProductFeed::load`] may go to the network.
    pub fn select(&mut self, selection: &CategorySelection) -> bool {
        let key = QueryKey::products(selection);
        if key == self.key {
            return false;
        }
        debug!(from = %self.key, to = %key, "Product feed re-keyed");
        self.key = key;
        true
    }

    pub async fn load(&self) -> Result<Vec<Product>, QueryError> {
        self.client.fetch(&self.key).await
    }

    pub fn snapshot(&self) -> QueryState<Vec<Product>> {
        self.client.snapshot(&self.key)
    }
}
