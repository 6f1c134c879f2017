use aurum_db::prelude::*;
use std::io::Write;

const SEED: &str = r#"{
    "categories": [
        { "_id": "c2", "name": "Rings", "slug": "rings", "displayOrder": 2 },
        { "_id": "c1", "name": "Necklaces", "slug": "necklaces", "displayOrder": 1 }
    ],
    "products": [
        { "_id": "p1", "name": "Gold Ring", "price": 1000, "imageUrl": "/r.jpg", "category": "rings" },
        { "_id": "p2", "name": "Silver Chain", "price": 50000, "imageUrl": "/c.jpg", "category": "necklaces" }
    ],
    "carousel": [
        { "_id": "s1", "imageUrl": "/s1.jpg", "title": "Bridal", "active": false },
        { "_id": "s2", "imageUrl": "/s2.jpg", "title": "Festive" }
    ]
}"#;

#[tokio::test]
async fn test_store_from_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let seed = SeedData::load(file.path()).await.unwrap();
    let store = MemoryStore::with_seed(seed).unwrap();

    let categories = store.categories().await.unwrap();
    assert_eq!(categories[0].slug, "necklaces");
    assert_eq!(store.products(Some("rings")).await.unwrap().len(), 1);
    assert_eq!(store.carousel_images().await.unwrap().len(), 1);
    assert!(store.shop_info().await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SeedData::load(dir.path().join("absent.json")).await.unwrap_err();
    assert!(matches!(err, DbError::Seed(_)));
}

#[tokio::test]
async fn test_store_is_shareable_as_trait_object() {
    let store: std::sync::Arc<dyn CatalogStore> = std::sync::Arc::new(MemoryStore::new());
    assert!(store.categories().await.unwrap().is_empty());
}
