//! Integration tests for Products domain
//!
//! These tests use real MongoDB via testcontainers to ensure:
//! - Documents round-trip through the `products` collection
//! - Store-assigned ids are returned and addressable
//! - Missing documents surface as `NotFound`
//!
//! They need a Docker daemon, so they are ignored by default:
//! `cargo test -p domain_products -- --ignored`

use domain_products::*;
use test_utils::{TestDataBuilder, TestMongo};

fn product_data(builder: &TestDataBuilder, label: &str) -> ProductData {
    ProductData {
        name: builder.product_name(label),
        description: "Integration test product".to_string(),
        price: builder.price(),
        category: Category {
            name: "Phones".to_string(),
            description: "Mobile devices".to_string(),
        },
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_product() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    repo.init_indexes().await.unwrap();
    let builder = TestDataBuilder::from_test_name("insert_and_find");

    let data = product_data(&builder, "phone");
    let created = repo.insert(data.clone()).await.unwrap();
    assert_eq!(created.data, data);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_in_insertion_order() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("find_all_order");

    let mut created = Vec::new();
    for label in ["first", "second", "third"] {
        created.push(repo.insert(product_data(&builder, label)).await.unwrap());
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_replaces_document() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("save_replaces");

    let mut product = repo.insert(product_data(&builder, "phone")).await.unwrap();
    product.data.price = 10.99;
    product.data.description = String::new();

    repo.save(&product).await.unwrap();

    let stored = repo.get(product.id).await.unwrap();
    assert_eq!(stored, product);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_product_is_not_found() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("missing_product");

    let id: ProductId = builder.object_id_hex().parse().unwrap();

    assert_eq!(repo.find_by_id(id).await.unwrap(), None);
    assert_eq!(repo.get(id).await.unwrap_err().kind(), ProductErrorKind::NotFound);
    assert_eq!(repo.delete(id).await.unwrap_err().kind(), ProductErrorKind::NotFound);

    let ghost = Product::new(id, product_data(&builder, "ghost"));
    assert_eq!(repo.save(&ghost).await.unwrap_err().kind(), ProductErrorKind::NotFound);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_lifecycle_against_mongo() {
    let mongo = TestMongo::new().await;
    let service = ProductService::new(MongoProductRepository::new(&mongo.database()));
    let builder = TestDataBuilder::from_test_name("service_lifecycle");

    let created = service
        .create(CreateProduct {
            name: builder.product_name("phone"),
            description: String::new(),
            price: builder.price(),
            category: Category {
                name: "Phones".to_string(),
                description: String::new(),
            },
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateProduct {
                price: Some(1.99),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.price, 1.99);
    assert_eq!(service.get_by_id(created.id).await.unwrap(), updated);

    service.delete(created.id).await.unwrap();
    assert_eq!(
        service.get_by_id(created.id).await.unwrap_err().kind(),
        ProductErrorKind::NotFound
    );
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_separate_collections_are_isolated() {
    let mongo = TestMongo::new().await;
    let db = mongo.database();
    let products = MongoProductRepository::new(&db);
    let archive = MongoProductRepository::with_collection(&db, "products_archive");
    let builder = TestDataBuilder::from_test_name("isolated_collections");

    products.insert(product_data(&builder, "phone")).await.unwrap();

    assert_eq!(products.find_all().await.unwrap().len(), 1);
    assert!(archive.find_all().await.unwrap().is_empty());
}
