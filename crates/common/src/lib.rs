//! Identifier types shared by every storefront crate.

pub mod types;

pub use types::{CustomerId, OrderId, OrderItemId, ProductId};
