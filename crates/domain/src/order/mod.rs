//! Order aggregate and related types.

mod aggregate;
mod item;
mod service;

pub use aggregate::Order;
pub use item::OrderItem;
pub use service::OrderService;
