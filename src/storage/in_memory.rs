//! In-memory implementation of Repository
//!
//! Contents live for the lifetime of the process. Entities are kept in
//! insertion order.

use crate::core::Entity;
use crate::core::service::Repository;
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory repository implementation
///
/// Cloning yields another handle onto the same collection, which is how
/// tests reach in to arrange fixtures. Uses RwLock for thread-safe access.
pub struct InMemoryStore<T: Entity> {
    entities: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Entity> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
        }
    }
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-populated in the given order
    ///
    /// Fails on an empty or duplicate id.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut map = IndexMap::new();
        for entity in entities {
            let id = entity.id().to_string();
            if id.is_empty() {
                bail!("{} with an empty id", T::display_name());
            }
            if map.contains_key(&id) {
                bail!("duplicate {} id: {}", T::display_name(), id);
            }
            map.insert(id, entity);
        }

        Ok(Self {
            entities: Arc::new(RwLock::new(map)),
        })
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entities.read().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryStore<T> {
    async fn insert(&self, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if entities.contains_key(entity.id()) {
            bail!("{} already exists: {}", T::display_name(), entity.id());
        }
        entities.insert(entity.id().to_string(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.values().cloned().collect())
    }

    async fn replace(&self, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = entities
            .get_mut(entity.id())
            .ok_or_else(|| anyhow!("{} not found: {}", T::display_name(), entity.id()))?;
        *slot = entity.clone();

        Ok(entity)
    }

    async fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(entities.shift_remove(id))
    }

    async fn contains(&self, id: &str) -> Result<bool> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.contains_key(id))
    }
}
