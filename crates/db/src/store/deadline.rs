use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use inventory_core::product::ProductInput;
use inventory_core::types::DbId;

use super::{ProductStore, StoreError};
use crate::models::product::Product;

/// Wraps another [`ProductStore`] and bounds every call by a deadline.
///
/// A call still running when the deadline passes is dropped and reported as
/// [`StoreError::DeadlineExceeded`].
pub struct DeadlineStore {
    inner: Arc<dyn ProductStore>,
    deadline: Duration,
}

impl DeadlineStore {
    pub fn new(inner: Arc<dyn ProductStore>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>> + Send,
    {
        tokio::time::timeout(self.deadline, call)
            .await
            .map_err(|_| StoreError::DeadlineExceeded(self.deadline))?
    }
}

#[async_trait]
impl ProductStore for DeadlineStore {
    async fn create(&self, input: &ProductInput) -> Result<Product, StoreError> {
        self.bounded(self.inner.create(input)).await
    }

    async fn get(&self, id: DbId) -> Result<Product, StoreError> {
        self.bounded(self.inner.get(id)).await
    }

    async fn update(&self, id: DbId, input: &ProductInput) -> Result<Product, StoreError> {
        self.bounded(self.inner.update(id, input)).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.bounded(self.inner.delete(id)).await
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.bounded(self.inner.list()).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(self.inner.ping()).await
    }
}
