//! Entity traits defining the core abstraction for dishes and orders

use crate::core::error::Fault;
use crate::core::validation::ValidationChain;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Base trait for everything kept in a store.
///
/// An entity is identified by an opaque string id that never changes after
/// creation.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// The label used in client messages (e.g., "Dish")
    fn display_name() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}

/// An entity that can be created and replaced through the API.
///
/// Implementors describe which checks gate each operation and how a
/// payload that passed those checks becomes an entity. The conversions may
/// assume their chain has already run.
pub trait Resource: Entity {
    /// Checks run before a create
    fn create_checks() -> ValidationChain<Self>;

    /// Checks run before an update, with the stored entity and route id in scope
    fn update_checks() -> ValidationChain<Self>;

    /// Build a new entity from a validated `data` payload
    fn from_payload(id: String, data: &Value) -> Result<Self, Fault>;

    /// Build the full replacement of `self` from a validated `data` payload.
    ///
    /// The id of `self` is kept.
    fn replaced_by(&self, data: &Value) -> Result<Self, Fault>;
}

/// A resource that also supports deletion
pub trait Removable: Resource {
    /// Checks run before a delete, with the stored entity and route id in scope
    fn delete_checks() -> ValidationChain<Self>;
}
