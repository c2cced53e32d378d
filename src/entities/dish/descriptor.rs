//! Route descriptor for dishes

use super::model::Dish;
use crate::core::service::EntityService;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::{
    create_entity, get_entity, list_entities, method_not_allowed, update_entity,
};
use axum::{Router, routing::get};

/// Descriptor for the Dish resource
///
/// Dishes have no delete route; `DELETE /dishes/{id}` answers 405 whether or
/// not the dish exists.
pub struct DishDescriptor {
    pub service: EntityService<Dish>,
}

impl DishDescriptor {
    pub fn new(service: EntityService<Dish>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_entities::<Dish>)
                    .post(create_entity::<Dish>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(get_entity::<Dish>)
                    .put(update_entity::<Dish>)
                    .fallback(method_not_allowed),
            )
            .with_state(self.service.clone())
    }
}
