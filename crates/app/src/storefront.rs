//! All application services over one set of repositories.

use std::sync::Arc;

use common::{CustomerId, OrderItemId};
use domain::{Address, EventDispatcher, Money, Order, OrderItem, Product};
use persistence::{CustomerRepository, OrderRepository, ProductRepository};

use crate::error::Result;
use crate::services::{CatalogService, CheckoutService, CustomerService};

/// The application services, sharing one dispatcher.
pub struct Storefront<C, P, O>
where
    C: CustomerRepository + Clone,
    P: ProductRepository,
    O: OrderRepository,
{
    pub customers: CustomerService<C>,
    pub catalog: CatalogService<P>,
    pub checkout: CheckoutService<C, O>,
}

/// What [`Storefront::run_sample`] produced.
#[derive(Debug)]
pub struct SampleRun {
    pub customer_id: CustomerId,
    pub products: Vec<Product>,
    pub order: Order,
    pub reward_points: Money,
}

impl<C, P, O> Storefront<C, P, O>
where
    C: CustomerRepository + Clone,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            customers: CustomerService::new(customers.clone(), dispatcher.clone()),
            catalog: CatalogService::new(products, dispatcher),
            checkout: CheckoutService::new(customers, orders),
        }
    }

    /// Registers a customer, adds two products, places an order, and moves
    /// the customer. Every id is derived from `run_id` so repeated runs
    /// against the same database do not collide.
    #[tracing::instrument(skip(self))]
    pub async fn run_sample(&self, run_id: &str) -> Result<SampleRun> {
        let customer = self
            .customers
            .register(format!("{run_id}-customer"), "Customer 1")
            .await?;

        let p1 = self
            .catalog
            .add_product(format!("{run_id}-p1"), "Product 1", Money::from_units(10))
            .await?;
        let p2 = self
            .catalog
            .add_product(format!("{run_id}-p2"), "Product 2", Money::from_cents(2550))
            .await?;

        let items = vec![
            item_for(format!("{run_id}-i1"), &p1, 2)?,
            item_for(format!("{run_id}-i2"), &p2, 1)?,
        ];
        let order = self.checkout.place_order(customer.id(), items).await?;

        let address = Address::new("Street 1", 123, "13330-250", "São Paulo")?;
        let customer = self.customers.change_address(customer.id(), address).await?;

        Ok(SampleRun {
            customer_id: customer.id().clone(),
            products: vec![p1, p2],
            order,
            reward_points: customer.reward_points(),
        })
    }
}

fn item_for(id: impl Into<OrderItemId>, product: &Product, quantity: u32) -> Result<OrderItem> {
    Ok(OrderItem::new(
        id,
        product.id().clone(),
        product.name(),
        product.price(),
        quantity,
    )?)
}
