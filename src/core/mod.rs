//! Core module containing the traits and types shared by every resource

pub mod entity;
pub mod error;
pub mod extractors;
pub mod id;
pub mod service;
pub mod validation;

pub use entity::{Entity, Removable, Resource};
pub use error::{EntityError, Fault, RequestError, ValidationError};
pub use extractors::{DataResponse, Envelope};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use service::{EntityService, Repository};
