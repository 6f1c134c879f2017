//! HTTP API.
//!
//! ## Endpoints
//!
//! - `GET /api/categories`, `POST /api/categories`
//! - `GET /api/categories/{slug}`, `PATCH /api/categories/{slug}`
//! - `GET /api/products[?category=<slug>]`, `POST /api/products`
//! - `GET /api/products/{id}`
//! - `GET /api/carousel`, `POST /api/carousel`
//! - `GET /api/shop-info`, `POST /api/shop-info`
//! - `GET /health`

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorBody};
pub use types::{HealthResponse, ProductsQuery};

use aurum_db::CatalogStore;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

/// Build the CORS layer.
///
/// With no configured origins any origin may read the catalog; writes need
/// a listed origin.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Router with the default CORS policy.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, &[])
}

/// Router with every endpoint, request tracing and CORS.
pub fn create_router_with_cors(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{slug}",
            get(handlers::get_category).patch(handlers::update_category),
        )
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{id}", get(handlers::get_product))
        .route(
            "/carousel",
            get(handlers::list_carousel).post(handlers::create_carousel_image),
        )
        .route(
            "/shop-info",
            get(handlers::get_shop_info).post(handlers::upsert_shop_info),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(cors_origins)),
        )
        .with_state(state)
}
