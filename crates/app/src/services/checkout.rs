use common::CustomerId;
use domain::{Money, Order, OrderItem, OrderService};
use persistence::{CustomerRepository, OrderRepository};

use crate::error::Result;

/// Order placement for stored customers.
pub struct CheckoutService<C: CustomerRepository, O: OrderRepository> {
    customers: C,
    orders: O,
}

impl<C: CustomerRepository, O: OrderRepository> CheckoutService<C, O> {
    pub fn new(customers: C, orders: O) -> Self {
        Self { customers, orders }
    }

    /// Places an order for a stored customer.
    ///
    /// Stores the customer with the earned reward points, then the order. If
    /// the order cannot be stored, the customer's previous points are written
    /// back before the error is returned. The two writes share no transaction,
    /// so a failure of that restore leaves the points credited.
    #[tracing::instrument(skip(self, items), fields(customer_id = %customer_id, items = items.len()))]
    pub async fn place_order(
        &self,
        customer_id: &CustomerId,
        items: Vec<OrderItem>,
    ) -> Result<Order> {
        let previous = self.customers.find_by_id(customer_id).await?;
        let mut customer = previous.clone();
        let order = OrderService::place_order(&mut customer, items)?;

        self.customers.update(&customer).await?;
        if let Err(e) = self.orders.create(&order).await {
            tracing::warn!(
                order_id = %order.id(),
                error = %e,
                "order not stored, restoring reward points"
            );
            self.customers.update(&previous).await?;
            return Err(e.into());
        }

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = %customer.reward_points(),
            "order placed"
        );
        Ok(order)
    }

    /// Combined total of every stored order placed by `customer_id`.
    pub async fn total_spent(&self, customer_id: &CustomerId) -> Result<Money> {
        let orders: Vec<Order> = self
            .orders
            .find_all()
            .await?
            .into_iter()
            .filter(|order| order.customer_id() == customer_id)
            .collect();
        Ok(OrderService::total(&orders))
    }
}
