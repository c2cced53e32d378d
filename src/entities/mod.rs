//! Entities module - the dishes and orders resources

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor};
pub use order::{Order, OrderDescriptor, OrderLine, OrderStatus};
