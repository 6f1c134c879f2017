//! REST API server for the Aurum jewelry catalog.
//!
//! Serves categories, products, carousel slides and shop info from a
//! [`CatalogStore`] over JSON. Handlers are thin: validation lives on the
//! record types, persistence behind the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use aurum_server::{config::ServerConfig, serve};
//!
//! let config = ServerConfig::default().with_port(8080);
//! serve(config).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;

pub use api::{create_router, create_router_with_cors, AppState};
pub use config::ServerConfig;
pub use error::ServerError;

use aurum_db::{CatalogStore, MemoryStore, SeedData};
use std::sync::Arc;
use tracing::info;

/// Build the store described by the config: seeded when a seed path is
/// set, empty otherwise.
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn CatalogStore>, ServerError> {
    let store = match &config.store.seed_path {
        Some(path) => {
            info!(path = %path.display(), "Loading seed data");
            MemoryStore::with_seed(SeedData::load(path).await?)?
        }
        None => {
            info!("Starting with an empty catalog");
            MemoryStore::new()
        }
    };
    Ok(Arc::new(store))
}

/// Open the store, bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store = open_store(&config).await?;
    let router = create_router_with_cors(AppState::new(store), &config.server.cors_origins);

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Aurum catalog API listening");

    axum::serve(listener, router).await?;
    Ok(())
}
