//! HTTP server: generic handlers, the resource registry and the builder
//! that assembles them into one router

pub mod builder;
pub mod entity_registry;
pub mod handlers;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
