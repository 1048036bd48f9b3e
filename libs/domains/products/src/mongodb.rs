//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductId};
use crate::repository::ProductRepository;

pub const COLLECTION_NAME: &str = "products";

/// Stored shape: the product fields next to a native `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    data: ProductData,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Product::new(doc.id.into(), doc.data)
    }
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_object_id(),
            data: product.data.clone(),
        }
    }
}

pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }

    /// Non-unique index on `name` for lookups by name.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_name".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(document.map(Product::from))
    }

    #[instrument(skip(self, data), fields(product_name = %data.name))]
    async fn insert(&self, data: ProductData) -> ProductResult<Product> {
        let result = self
            .collection
            .clone_with_type::<ProductData>()
            .insert_one(&data)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ProductError::Storage(format!(
                "insert returned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(product_id = %id, "Product inserted successfully");
        Ok(Product::new(id.into(), data))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, product: &Product) -> ProductResult<()> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": product.id.as_object_id() },
                ProductDocument::from(product),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!(product_id = %product.id, "Product saved successfully");
        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> ProductResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }
}
