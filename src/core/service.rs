//! Repository trait and the generic resource service
//!
//! [`Repository`] is the storage seam: an ordered id → entity collection.
//! [`EntityService`] composes a repository, an id generator and the
//! resource's validation chains into the create/read/list/update/delete
//! operations the HTTP handlers call.

use crate::core::entity::{Entity, Removable, Resource};
use crate::core::error::{EntityError, Fault};
use crate::core::id::IdGenerator;
use crate::core::validation::{Submission, ValidationChain};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Storage for one entity type
///
/// Implementations keep entities in insertion order; `list` returns them in
/// that order and `replace` keeps an entity's position.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Append a new entity; fails if its id is already taken
    async fn insert(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all entities in storage order
    async fn list(&self) -> Result<Vec<T>>;

    /// Overwrite the entity stored under `entity.id()`; fails if absent
    async fn replace(&self, entity: T) -> Result<T>;

    /// Remove an entity, returning it if it existed
    async fn remove(&self, id: &str) -> Result<Option<T>>;

    /// Whether an entity is stored under `id`
    async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}

/// Create/read/list/update/delete for one resource type
///
/// Mutations hold a writer lock from the first read to the final write, so
/// no other mutation of the same collection interleaves between validation
/// and storage.
pub struct EntityService<T: Resource> {
    repository: Arc<dyn Repository<T>>,
    ids: Arc<dyn IdGenerator>,
    create_checks: Arc<ValidationChain<T>>,
    update_checks: Arc<ValidationChain<T>>,
    writer: Arc<Mutex<()>>,
}

impl<T: Resource> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            ids: self.ids.clone(),
            create_checks: self.create_checks.clone(),
            update_checks: self.update_checks.clone(),
            writer: self.writer.clone(),
        }
    }
}

impl<T: Resource> EntityService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            ids,
            create_checks: Arc::new(T::create_checks()),
            update_checks: Arc::new(T::update_checks()),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Every stored entity, in storage order
    pub async fn list(&self) -> Result<Vec<T>, Fault> {
        Ok(self.repository.list().await?)
    }

    /// The entity stored under `id`
    pub async fn read(&self, id: &str) -> Result<T, Fault> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Validate `data`, assign a fresh id and append the new entity.
    ///
    /// Any id supplied in `data` is ignored.
    pub async fn create(&self, data: Option<Value>) -> Result<T, Fault> {
        self.create_checks.run(&Submission::new(data.as_ref()))?;

        let _writer = self.writer.lock().await;
        let id = self.fresh_id().await?;
        let entity = T::from_payload(id, payload(&data))?;
        let created = self.repository.insert(entity).await?;

        tracing::info!(
            resource = T::resource_name(),
            id = %created.id(),
            "entity created"
        );
        Ok(created)
    }

    /// Validate `data` against the entity stored under `id` and replace every
    /// mutable field.
    pub async fn update(&self, id: &str, data: Option<Value>) -> Result<T, Fault> {
        let _writer = self.writer.lock().await;
        let stored = self.repository.get(id).await?;

        let submission = Submission::new(data.as_ref())
            .for_route(id)
            .against(stored.as_ref());
        self.update_checks.run(&submission)?;

        let stored = stored.ok_or_else(|| not_found::<T>(id))?;
        let updated = stored.replaced_by(payload(&data))?;
        let updated = self.repository.replace(updated).await?;

        tracing::info!(resource = T::resource_name(), id = %id, "entity updated");
        Ok(updated)
    }

    async fn fresh_id(&self) -> Result<String, Fault> {
        loop {
            let id = self.ids.next_id();
            if !self.repository.contains(&id).await? {
                return Ok(id);
            }
            tracing::debug!(resource = T::resource_name(), id = %id, "generated id taken, drawing again");
        }
    }
}

impl<T: Removable> EntityService<T> {
    /// Run the delete checks against the entity stored under `id`, then remove it
    pub async fn delete(&self, id: &str) -> Result<(), Fault> {
        let _writer = self.writer.lock().await;
        let stored = self.repository.get(id).await?;

        T::delete_checks().run(&Submission::new(None).for_route(id).against(stored.as_ref()))?;

        self.repository
            .remove(id)
            .await?
            .ok_or_else(|| not_found::<T>(id))?;

        tracing::info!(resource = T::resource_name(), id = %id, "entity deleted");
        Ok(())
    }
}

fn payload(data: &Option<Value>) -> &Value {
    data.as_ref().unwrap_or(&Value::Null)
}

fn not_found<T: Entity>(id: &str) -> Fault {
    EntityError::NotFound {
        entity: T::display_name(),
        id: id.to_string(),
    }
    .into()
}
