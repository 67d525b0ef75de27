//! The product store: the gateway between HTTP handlers and persisted rows.
//!
//! Handlers hold an `Arc<dyn ProductStore>` injected through application
//! state, so tests can run the full router against [`MemoryProductStore`].

mod deadline;
mod memory;
mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use inventory_core::product::ProductInput;
use inventory_core::types::DbId;

use crate::models::product::Product;

pub use deadline::DeadlineStore;
pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Failures surfaced by a [`ProductStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No product with the given id exists.
    #[error("Product with id {id} not found")]
    NotFound { id: DbId },

    /// Any fault reported by the database driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The call did not finish within the request deadline.
    #[error("Store call exceeded deadline of {}ms", .0.as_millis())]
    DeadlineExceeded(Duration),

    /// The store cannot serve requests (used by the in-memory store).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Every operation is a single independent round trip; no transaction
/// spans more than one call.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a product and return it with its assigned id and timestamps.
    async fn create(&self, input: &ProductInput) -> Result<Product, StoreError>;

    /// Fetch one product, or [`StoreError::NotFound`].
    async fn get(&self, id: DbId) -> Result<Product, StoreError>;

    /// Replace name, description, price and quantity and refresh
    /// `updated_at`. A missing id is [`StoreError::NotFound`].
    async fn update(&self, id: DbId, input: &ProductInput) -> Result<Product, StoreError>;

    /// Remove a product. Deleting a missing id is not an error; the return
    /// value says whether a row was actually removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// All products in ascending id order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
