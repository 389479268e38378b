use std::sync::Arc;

use async_trait::async_trait;
use domain::{Customer, Order, Product};
use tokio::sync::RwLock;

use crate::{
    PersistenceError, Result,
    repository::{Identified, Repository},
};

/// In-memory repository implementation for testing.
///
/// Stores entities in insertion order and provides the same semantics as the
/// PostgreSQL repositories, minus foreign keys. Clones share the same storage.
#[derive(Clone)]
pub struct InMemoryRepository<T: Identified> {
    entities: Arc<RwLock<Vec<T>>>,
}

pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;
pub type InMemoryProductRepository = InMemoryRepository<Product>;
pub type InMemoryOrderRepository = InMemoryRepository<Order>;

impl<T: Identified> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Identified> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }

    /// Removes every stored entity.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }
}

#[async_trait]
impl<T: Identified> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> Result<()> {
        let mut store = self.entities.write().await;

        if store.iter().any(|e| e.identity() == entity.identity()) {
            return Err(PersistenceError::already_exists(
                T::ENTITY,
                entity.identity(),
            ));
        }

        store.push(entity.clone());
        metrics::counter!("repository_writes", "entity" => T::ENTITY).increment(1);
        Ok(())
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<T> {
        let store = self.entities.read().await;
        store
            .iter()
            .find(|e| e.identity() == id)
            .cloned()
            .ok_or_else(|| PersistenceError::not_found(T::ENTITY, id))
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.entities.read().await.clone())
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let mut store = self.entities.write().await;

        let slot = store
            .iter_mut()
            .find(|e| e.identity() == entity.identity())
            .ok_or_else(|| PersistenceError::not_found(T::ENTITY, entity.identity()))?;
        *slot = entity.clone();

        metrics::counter!("repository_writes", "entity" => T::ENTITY).increment(1);
        Ok(())
    }
}
