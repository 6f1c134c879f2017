//! Route handlers.
//!
//! Each handler is a thin pass-through to the [`CatalogStore`]; failures map
//! to a fixed public message and the cause is logged.
//!
//! [`CatalogStore`]: aurum_db::CatalogStore

use super::error::ApiError;
use super::types::{HealthResponse, ProductsQuery};
use super::AppState;
use aurum_catalog::prelude::*;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

type ApiResult<T> = Result<T, ApiError>;
type Created<T> = (StatusCode, Json<T>);

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

// =============================================================================
// CATEGORIES
// =============================================================================

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    state
        .store
        .categories()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch categories").because(e))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Category>> {
    match state.store.category_by_slug(&slug).await {
        Ok(Some(category)) => Ok(Json(category)),
        Ok(None) => Err(ApiError::not_found("Category not found")),
        Err(e) => Err(ApiError::internal("Failed to fetch category").because(e)),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    body: Result<Json<NewCategory>, JsonRejection>,
) -> ApiResult<Created<Category>> {
    const INVALID: &str = "Invalid category data";

    let Json(category) = body.map_err(|e| ApiError::bad_request(INVALID).because(e))?;
    let category = state
        .store
        .create_category(category)
        .await
        .map_err(|e| ApiError::bad_request(INVALID).because(e))?;

    info!(id = %category.id, slug = %category.slug, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// Partial update. A missing slug is reported as a failed update (400), not
/// as a 404.
pub async fn update_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Result<Json<CategoryPatch>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    const FAILED: &str = "Failed to update category";

    let Json(patch) = body.map_err(|e| ApiError::bad_request(FAILED).because(e))?;
    match state.store.update_category(&slug, patch).await {
        Ok(Some(category)) => Ok(Json(category)),
        Ok(None) => Err(ApiError::bad_request(FAILED).because(format!("no category {}", slug))),
        Err(e) => Err(ApiError::bad_request(FAILED).because(e)),
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    state
        .store
        .products(query.category.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch products").because(e))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    match state.store.product_by_id(&id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(ApiError::not_found("Product not found")),
        Err(e) => Err(ApiError::internal("Failed to fetch product").because(e)),
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Created<Product>> {
    const INVALID: &str = "Invalid product data";

    let Json(product) = body.map_err(|e| ApiError::bad_request(INVALID).because(e))?;
    let product = state
        .store
        .create_product(product)
        .await
        .map_err(|e| ApiError::bad_request(INVALID).because(e))?;

    info!(id = %product.id, category = %product.category, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

// =============================================================================
// CAROUSEL
// =============================================================================

pub async fn list_carousel(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CarouselImage>>> {
    state
        .store
        .carousel_images()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch carousel images").because(e))
}

pub async fn create_carousel_image(
    State(state): State<AppState>,
    body: Result<Json<NewCarouselImage>, JsonRejection>,
) -> ApiResult<Created<CarouselImage>> {
    const INVALID: &str = "Invalid carousel image data";

    let Json(image) = body.map_err(|e| ApiError::bad_request(INVALID).because(e))?;
    let image = state
        .store
        .create_carousel_image(image)
        .await
        .map_err(|e| ApiError::bad_request(INVALID).because(e))?;

    info!(id = %image.id, "Carousel image created");
    Ok((StatusCode::CREATED, Json(image)))
}

// =============================================================================
// SHOP INFO
// =============================================================================

pub async fn get_shop_info(State(state): State<AppState>) -> ApiResult<Json<ShopInfo>> {
    match state.store.shop_info().await {
        Ok(Some(info)) => Ok(Json(info)),
        Ok(None) => Err(ApiError::not_found("Shop info not found")),
        Err(e) => Err(ApiError::internal("Failed to fetch shop info").because(e)),
    }
}

/// Create or overwrite the shop contact card. Always 200.
pub async fn upsert_shop_info(
    State(state): State<AppState>,
    body: Result<Json<NewShopInfo>, JsonRejection>,
) -> ApiResult<Json<ShopInfo>> {
    const INVALID: &str = "Invalid shop info data";

    let Json(info) = body.map_err(|e| ApiError::bad_request(INVALID).because(e))?;
    let info = state
        .store
        .upsert_shop_info(info)
        .await
        .map_err(|e| ApiError::bad_request(INVALID).because(e))?;

    info!(id = %info.id, "Shop info saved");
    Ok(Json(info))
}
