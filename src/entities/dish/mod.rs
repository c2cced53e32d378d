//! Dish entity module

pub mod descriptor;
pub mod model;
pub mod validation;

pub use descriptor::DishDescriptor;
pub use model::Dish;
