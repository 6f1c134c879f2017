//! Integration tests for the catalog HTTP API.
//!
//! Uses axum-test to drive the router without binding a socket, except for
//! the last test, which serves on an ephemeral port for the HTTP fetcher.

use aurum_catalog::prelude::*;
use aurum_db::{MemoryStore, SeedData};
use aurum_server::api::{create_router, AppState, ErrorBody, HealthResponse};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn seed() -> SeedData {
    let mut earrings = Category::new("c2", "Earrings", "earrings");
    earrings.display_order = 2;
    let mut rings = Category::new("c1", "Rings", "rings");
    rings.display_order = 1;

    let mut chain = Product::new("p2", "Silver Chain", 50000, "necklaces");
    chain.display_order = 1;
    let mut ring = Product::new("p1", "Gold Ring", 1000, "rings");
    ring.display_order = 2;

    SeedData {
        categories: vec![earrings, rings],
        products: vec![ring, chain],
        ..Default::default()
    }
}

fn create_test_server() -> TestServer {
    let store = MemoryStore::new();
    TestServer::new(create_router(AppState::new(Arc::new(store)))).unwrap()
}

fn create_populated_test_server() -> TestServer {
    let store = MemoryStore::with_seed(seed()).unwrap();
    TestServer::new(create_router(AppState::new(Arc::new(store)))).unwrap()
}

fn message(response: &axum_test::TestResponse) -> String {
    response.json::<ErrorBody>().message
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[tokio::test]
async fn test_categories_sorted_by_display_order() {
    let server = create_populated_test_server();
    let categories: Vec<Category> = server.get("/api/categories").await.json();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["rings", "earrings"]);
}

#[tokio::test]
async fn test_category_by_slug() {
    let server = create_populated_test_server();

    let found = server.get("/api/categories/rings").await;
    found.assert_status_ok();
    assert_eq!(found.json::<serde_json::Value>()["_id"], "c1");

    let missing = server.get("/api/categories/anklets").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(message(&missing), "Category not found");
}

#[tokio::test]
async fn test_create_category() {
    let server = create_test_server();
    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "Bangles", "slug": "bangles", "displayOrder": 4 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let category: Category = response.json();
    assert_eq!(category.slug, "bangles");
    assert_eq!(category.id.as_str().len(), 24);
}

#[tokio::test]
async fn test_create_category_rejects_bad_input() {
    let server = create_populated_test_server();

    let missing_slug = server
        .post("/api/categories")
        .json(&json!({ "name": "Nameless" }))
        .await;
    missing_slug.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&missing_slug), "Invalid category data");

    let duplicate = server
        .post("/api/categories")
        .json(&json!({ "name": "Rings", "slug": "rings" }))
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);

    let not_json = server.post("/api/categories").text("slug=rings").await;
    not_json.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&not_json), "Invalid category data");
}

#[tokio::test]
async fn test_patch_category() {
    let server = create_populated_test_server();

    let updated = server
        .patch("/api/categories/rings")
        .json(&json!({ "name": "Fine Rings" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Category>().name, "Fine Rings");

    let missing = server
        .patch("/api/categories/anklets")
        .json(&json!({ "name": "Anklets" }))
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&missing), "Failed to update category");
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[tokio::test]
async fn test_products_listing_and_category_filter() {
    let server = create_populated_test_server();

    let all: Vec<Product> = server.get("/api/products").await.json();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Silver Chain", "Gold Ring"]);

    let everything: Vec<Product> = server
        .get("/api/products")
        .add_query_param("category", "all")
        .await
        .json();
    assert_eq!(everything.len(), 2);

    let blank: Vec<Product> = server.get("/api/products?category=").await.json();
    assert_eq!(blank.len(), 2);

    let rings: Vec<Product> = server
        .get("/api/products")
        .add_query_param("category", "rings")
        .await
        .json();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].name, "Gold Ring");
}

#[tokio::test]
async fn test_product_by_id() {
    let server = create_populated_test_server();
    server.get("/api/products/p1").await.assert_status_ok();

    let missing = server.get("/api/products/nope").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(message(&missing), "Product not found");
}

#[tokio::test]
async fn test_create_product() {
    let server = create_test_server();
    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Kundan Choker",
            "price": 85000,
            "originalPrice": 95000,
            "imageUrl": "/img/choker.jpg",
            "category": "necklaces",
            "purity": "22K",
            "occasion": "Bridal"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let product: Product = response.json();
    assert_eq!(product.badge(), Some(ProductBadge::Sale));
    assert!(product.in_stock);

    let invalid = server
        .post("/api/products")
        .json(&json!({ "name": "No Price", "imageUrl": "/x.jpg", "category": "rings" }))
        .await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&invalid), "Invalid product data");
}

// =============================================================================
// CAROUSEL
// =============================================================================

#[tokio::test]
async fn test_carousel_serves_active_slides() {
    let server = create_test_server();
    for (title, order, active) in [("Bridal", 2, true), ("Old", 0, false), ("Festive", 1, true)] {
        server
            .post("/api/carousel")
            .json(&json!({
                "imageUrl": format!("/slides/{title}.jpg"),
                "title": title,
                "displayOrder": order,
                "active": active
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let slides: Vec<CarouselImage> = server.get("/api/carousel").await.json();
    let titles: Vec<&str> = slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Festive", "Bridal"]);

    let invalid = server.post("/api/carousel").json(&json!({ "title": "x" })).await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&invalid), "Invalid carousel image data");
}

// =============================================================================
// SHOP INFO
// =============================================================================

#[tokio::test]
async fn test_shop_info_upsert() {
    let server = create_test_server();

    let missing = server.get("/api/shop-info").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(message(&missing), "Shop info not found");

    let body = json!({
        "address": "12 MG Road, Bengaluru",
        "phone": "+91 98450 00000",
        "email": "hello@aurum.in",
        "hours": "10am - 8pm"
    });
    let first = server.post("/api/shop-info").json(&body).await;
    first.assert_status_ok();
    let first: ShopInfo = first.json();

    let mut changed = body.clone();
    changed["hours"] = json!("11am - 9pm");
    let second: ShopInfo = server.post("/api/shop-info").json(&changed).await.json();
    assert_eq!(first.id, second.id);

    let stored: ShopInfo = server.get("/api/shop-info").await.json();
    assert_eq!(stored.hours, "11am - 9pm");

    let invalid = server
        .post("/api/shop-info")
        .json(&json!({ "address": "x", "phone": "y", "email": "not-an-email", "hours": "z" }))
        .await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&invalid), "Invalid shop info data");
}

// =============================================================================
// HTTP FETCHER AGAINST A LIVE SERVER
// =============================================================================

#[tokio::test]
async fn test_http_fetcher_round_trip() {
    use aurum_query::prelude::*;
    use std::time::Duration;

    let store = MemoryStore::with_seed(seed()).unwrap();
    let router = create_router(AppState::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let fetcher = HttpFetcher::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let client = QueryClient::new(Arc::new(fetcher));

    let rings = client
        .products(&CategorySelection::from_slug("rings"))
        .await
        .unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(client.categories().await.unwrap().len(), 2);
    assert_eq!(client.shop_info().await.unwrap(), None);
}

#[tokio::test]
async fn test_http_fetcher_encodes_category_slug() {
    use aurum_query::prelude::*;
    use std::time::Duration;

    let mut seed = seed();
    seed.products
        .push(Product::new("p3", "Two-Tone Bangle", 20000, "gold&silver"));
    let store = MemoryStore::with_seed(seed).unwrap();
    let router = create_router(AppState::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let fetcher = HttpFetcher::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let client = QueryClient::new(Arc::new(fetcher));

    let two_tone = client
        .products(&CategorySelection::from_slug("gold&silver"))
        .await
        .unwrap();
    assert_eq!(two_tone.len(), 1);
    assert_eq!(two_tone[0].name, "Two-Tone Bangle");
}
