use async_trait::async_trait;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductId};

/// Persistence operations for products.
///
/// Implementations never validate; callers hand over data that already
/// passed the field rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Like [`Self::find_by_id`] but a missing product is [`ProductError::NotFound`].
    async fn get(&self, id: ProductId) -> ProductResult<Product> {
        self.find_by_id(id).await?.ok_or(ProductError::NotFound(id))
    }

    /// Store a new product; the store assigns its id.
    async fn insert(&self, data: ProductData) -> ProductResult<Product>;

    /// Replace the stored product with the same id.
    async fn save(&self, product: &Product) -> ProductResult<()>;

    async fn delete(&self, id: ProductId) -> ProductResult<()>;
}
