use async_trait::async_trait;
use inventory_core::product::ProductInput;
use inventory_core::types::DbId;

use super::{ProductStore, StoreError};
use crate::models::product::Product;
use crate::repositories::ProductRepo;
use crate::DbPool;

/// [`ProductStore`] backed by PostgreSQL through [`ProductRepo`].
///
/// Cloning is cheap; the pool is reference-counted.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, input: &ProductInput) -> Result<Product, StoreError> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn get(&self, id: DbId) -> Result<Product, StoreError> {
        ProductRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, id: DbId, input: &ProductInput) -> Result<Product, StoreError> {
        ProductRepo::update(&self.pool, id, input)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let removed = ProductRepo::delete(&self.pool, id).await?;
        if !removed {
            tracing::debug!(product_id = id, "Delete matched no product row");
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(ProductRepo::list(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
