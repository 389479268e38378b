//! Application services: load entities, apply domain logic, persist, and
//! announce what happened through the event dispatcher.

mod catalog;
mod checkout;
mod customer;

pub use catalog::CatalogService;
pub use checkout::CheckoutService;
pub use customer::CustomerService;
