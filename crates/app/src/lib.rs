//! Storefront application layer.
//!
//! Wires the domain and persistence crates together: application services
//! that persist entities and announce domain events, runtime configuration,
//! and tracing setup for the `storefront` binary.

pub mod config;
pub mod error;
pub mod services;
pub mod storefront;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::{CatalogService, CheckoutService, CustomerService};
pub use storefront::{SampleRun, Storefront};

use domain::EventDispatcher;

/// Creates a dispatcher with every shipped handler registered.
pub fn default_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    domain::event::handlers::register_defaults(&mut dispatcher);
    dispatcher
}
