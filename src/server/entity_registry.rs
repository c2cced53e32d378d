//! Entity registry collecting per-resource route descriptors

use axum::Router;

/// Trait that describes how to build routes for a resource
///
/// Each resource (dishes, orders) implements this trait to provide its
/// routes. Verbs a path does not support must answer 405.
pub trait EntityDescriptor: Send + Sync {
    /// The plural path segment (e.g., "dishes")
    fn plural(&self) -> &str;

    /// Build the routes for this resource
    ///
    /// Should return a Router with routes like:
    /// - GET /{plural}
    /// - POST /{plural}
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application
///
/// Descriptors are kept in registration order.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register a descriptor, replacing any earlier one with the same plural
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors.retain(|d| d.plural() != descriptor.plural());
        self.descriptors.push(descriptor);
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }
}
