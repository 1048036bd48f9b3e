//! Process-local [`ProductRepository`] for tests and database-free runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductId};
use crate::repository::ProductRepository;

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, data: ProductData) -> ProductResult<Product> {
        let product = Product::new(ProductId::new(), data);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn save(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}
