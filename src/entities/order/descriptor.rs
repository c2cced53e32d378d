//! Route descriptor for orders

use super::model::Order;
use crate::core::service::EntityService;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::{
    create_entity, delete_entity, get_entity, list_entities, method_not_allowed, update_entity,
};
use axum::{Router, routing::get};

/// Descriptor for the Order resource
pub struct OrderDescriptor {
    pub service: EntityService<Order>,
}

impl OrderDescriptor {
    pub fn new(service: EntityService<Order>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                get(list_entities::<Order>)
                    .post(create_entity::<Order>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{order_id}",
                get(get_entity::<Order>)
                    .put(update_entity::<Order>)
                    .delete(delete_entity::<Order>)
                    .fallback(method_not_allowed),
            )
            .with_state(self.service.clone())
    }
}
