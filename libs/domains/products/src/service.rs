//! Product use cases

use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::repository::ProductRepository;

/// Validates input and drives the repository.
///
/// Input is validated before any repository call, so a rejected request has
/// no side effects.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;

        let product = self.repository.insert(input.into()).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_by_id(&self, id: ProductId) -> ProductResult<Product> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self.repository.get(id).await?;
        input.apply_to(&mut product.data);
        self.repository.save(&product).await?;

        info!(product_id = %id, "Product updated");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: ProductId) -> ProductResult<()> {
        let product = self.repository.get(id).await?;
        self.repository.delete(product.id).await?;

        if self.repository.find_by_id(id).await?.is_some() {
            return Err(ProductError::Storage(format!(
                "product {id} is still present after delete"
            )));
        }

        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
