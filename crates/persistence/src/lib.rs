//! Repositories for storefront entities.
//!
//! - [`Repository`] is the create/find/update contract, one per entity type
//! - [`postgres`] stores entities in PostgreSQL through sqlx
//! - [`memory`] keeps them in process memory, for tests and demos

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::{PersistenceError, Result};
pub use memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};
pub use postgres::{PgCustomerRepository, PgOrderRepository, PgProductRepository, run_migrations};
pub use repository::{
    CustomerRepository, Identified, OrderRepository, ProductRepository, Repository,
};
