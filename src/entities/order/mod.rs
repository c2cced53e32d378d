pub mod descriptor;
pub mod model;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use model::{Order, OrderLine, OrderStatus};
