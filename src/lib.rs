//! # grubdash
//!
//! REST backend for a food-delivery storefront: a menu of dishes and the
//! orders placed against it.
//!
//! ## Resources
//!
//! - `GET|POST /dishes`, `GET|PUT /dishes/{dish_id}`
//! - `GET|POST /orders`, `GET|PUT|DELETE /orders/{order_id}`
//! - `GET /health`
//!
//! Request and success bodies wrap their payload as `{ "data": ... }`;
//! failures answer `{ "error": "<message>" }` with a 4xx or 500 status.
//! Dishes are never deleted. Orders can only be deleted while pending and
//! cannot be changed once delivered.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let (dishes, orders) = SeedData::from_yaml_file("data/seed.yaml")?.into_stores()?;
//!
//! ServerBuilder::new()
//!     .with_config(AppConfig::load()?)
//!     .with_dish_repository(dishes)
//!     .with_order_repository(orders)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Entity, Removable, Resource},
        error::{EntityError, Fault, RequestError, ValidationError},
        extractors::{DataResponse, Envelope},
        id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator},
        service::{EntityService, Repository},
        validation::{Check, Submission, ValidationChain},
    };

    // === Resources ===
    pub use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor, OrderLine, OrderStatus};

    // === Storage ===
    pub use crate::storage::{InMemoryStore, SeedData};

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
