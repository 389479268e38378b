//! Domain layer for the storefront.
//!
//! This crate provides:
//! - Entities with validated invariants: [`Customer`], [`Product`], [`Order`],
//!   [`OrderItem`], and the [`Address`] / [`Money`] value objects
//! - Domain services: [`OrderService`] and [`ProductService`]
//! - Domain events and the synchronous [`EventDispatcher`] that fans them out
//!   to registered [`EventHandler`]s

pub mod customer;
pub mod error;
pub mod event;
pub mod order;
pub mod product;
pub mod value_objects;

pub use common::{CustomerId, OrderId, OrderItemId, ProductId};
pub use customer::Customer;
pub use error::DomainError;
pub use event::{
    DispatchError, Event, EventData, EventDispatcher, EventHandler, EventKind, HandlerError,
};
pub use order::{Order, OrderItem, OrderService};
pub use product::{Product, ProductService};
pub use value_objects::{Address, Money};
