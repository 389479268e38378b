use async_trait::async_trait;
use common::{CustomerId, OrderId, ProductId};
use domain::{Customer, Order, Product};

use crate::Result;

/// An entity that can be stored and looked up by its identifier.
pub trait Identified: Clone + Send + Sync + 'static {
    /// The identifier type.
    type Id: Clone + Eq + std::fmt::Display + Send + Sync + 'static;

    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    fn identity(&self) -> &Self::Id;
}

impl Identified for Customer {
    type Id = CustomerId;
    const ENTITY: &'static str = "Customer";

    fn identity(&self) -> &CustomerId {
        self.id()
    }
}

impl Identified for Product {
    type Id = ProductId;
    const ENTITY: &'static str = "Product";

    fn identity(&self) -> &ProductId {
        self.id()
    }
}

impl Identified for Order {
    type Id = OrderId;
    const ENTITY: &'static str = "Order";

    fn identity(&self) -> &OrderId {
        self.id()
    }
}

/// Persistence access for one entity type.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T: Identified>: Send + Sync {
    /// Stores a new entity.
    ///
    /// Fails with `AlreadyExists` if an entity with the same id is stored.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Loads an entity by id.
    ///
    /// Fails with `NotFound` if no such entity is stored.
    async fn find_by_id(&self, id: &T::Id) -> Result<T>;

    /// Loads every stored entity, oldest first.
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Replaces the stored state of an existing entity.
    ///
    /// Fails with `NotFound` if the entity was never created.
    async fn update(&self, entity: &T) -> Result<()>;
}

/// Repository for [`Customer`] entities.
pub trait CustomerRepository: Repository<Customer> {}
impl<R: Repository<Customer> + ?Sized> CustomerRepository for R {}

/// Repository for [`Product`] entities.
pub trait ProductRepository: Repository<Product> {}
impl<R: Repository<Product> + ?Sized> ProductRepository for R {}

/// Repository for [`Order`] aggregates, items included.
pub trait OrderRepository: Repository<Order> {}
impl<R: Repository<Order> + ?Sized> OrderRepository for R {}
