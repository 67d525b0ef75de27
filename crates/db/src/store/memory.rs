use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use inventory_core::product::ProductInput;
use inventory_core::types::DbId;

use super::{ProductStore, StoreError};
use crate::models::product::Product;

/// In-process [`ProductStore`] with the same observable semantics as
/// [`PgProductStore`](super::PgProductStore): ids start at 1 and are never
/// reused, listing is ordered by id, deletes are idempotent.
///
/// [`set_unavailable`](Self::set_unavailable) makes every subsequent call
/// fail with [`StoreError::Unavailable`].
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    state: Mutex<MemoryState>,
    unavailable: AtomicBool,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    rows: BTreeMap<DbId, Product>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store is switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, input: &ProductInput) -> Result<Product, StoreError> {
        self.check_available()?;
        let mut state = self.lock();
        state.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: state.last_id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            quantity: input.quantity,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, id: DbId) -> Result<Product, StoreError> {
        self.check_available()?;
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, id: DbId, input: &ProductInput) -> Result<Product, StoreError> {
        self.check_available()?;
        let mut state = self.lock();
        let product = state
            .rows
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        product.name = input.name.clone();
        product.description = input.description.clone();
        product.price = input.price;
        product.quantity = input.quantity;
        product.updated_at = Utc::now().max(product.created_at);
        Ok(product.clone())
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.lock().rows.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.check_available()?;
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(name: &str, quantity: i32) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: String::new(),
            price: 1.5,
            quantity,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_equal_timestamps() {
        let store = MemoryProductStore::new();
        let a = store.create(&input("a", 1)).await.unwrap();
        let b = store.create(&input("b", 2)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryProductStore::new();
        let a = store.create(&input("a", 1)).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());

        let b = store.create(&input("b", 1)).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_advances_updated_at() {
        let store = MemoryProductStore::new();
        let created = store.create(&input("a", 1)).await.unwrap();
        let updated = store.update(created.id, &input("b", 7)).await.unwrap();

        assert_eq!(updated.name, "b");
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryProductStore::new();
        let err = store.update(9, &input("x", 1)).await.unwrap_err();
        assert_matches!(err, StoreError::NotFound { id: 9 });
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryProductStore::new();
        let p = store.create(&input("a", 1)).await.unwrap();

        assert!(store.delete(p.id).await.unwrap());
        assert!(!store.delete(p.id).await.unwrap());
        assert_matches!(
            store.get(p.id).await,
            Err(StoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryProductStore::new();
        for name in ["c", "a", "b"] {
            store.create(&input(name, 1)).await.unwrap();
        }
        store.update(1, &input("z", 1)).await.unwrap();

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryProductStore::new();
        store.set_unavailable(true);

        assert_matches!(store.list().await, Err(StoreError::Unavailable(_)));
        assert_matches!(store.ping().await, Err(StoreError::Unavailable(_)));
        assert_matches!(
            store.create(&input("a", 1)).await,
            Err(StoreError::Unavailable(_))
        );
        assert!(store.is_empty());
    }
}
