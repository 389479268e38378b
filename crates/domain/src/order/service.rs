//! Order domain service: totals across orders and order placement.

use crate::customer::Customer;
use crate::error::DomainError;
use crate::value_objects::Money;

use super::{Order, OrderItem};

/// Stateless order operations that span more than one entity.
pub struct OrderService;

impl OrderService {
    /// Returns the combined total of the given orders.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places an order for a customer and credits their reward points.
    ///
    /// The customer earns half of the order total as reward points, kept to
    /// the cent: a 15.00 order yields 7.50.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id(), items = items.len()))]
    pub fn place_order(
        customer: &mut Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        if items.is_empty() {
            return Err(DomainError::OrderMustHaveItems);
        }

        let order = Order::new(customer.id().clone(), items)?;
        let points = Self::reward_points_for(order.total());
        customer.add_reward_points(points);

        tracing::debug!(order_id = %order.id(), total = %order.total(), %points, "order placed");

        Ok(order)
    }

    /// Reward points earned for spending `total`. Half a cent is dropped.
    pub fn reward_points_for(total: Money) -> Money {
        total.half()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_of_all_orders() {
        let item1 = OrderItem::new("i1", "p1", "Item 1", Money::from_units(200), 2).unwrap();
        let item2 = OrderItem::new("i2", "p2", "Item 2", Money::from_units(100), 3).unwrap();

        let order1 = Order::new("c1", vec![item1]).unwrap();
        let order2 = Order::new("c1", vec![item2]).unwrap();

        let total = OrderService::total(&[order1, order2]);

        assert_eq!(total, Money::from_units(700));
    }

    #[test]
    fn test_total_of_no_orders_is_zero() {
        assert_eq!(OrderService::total(&[]), Money::zero());
    }

    #[test]
    fn test_place_order_awards_half_the_total() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let item = OrderItem::new("i1", "p1", "Item 1", Money::from_units(10), 1).unwrap();

        let order = OrderService::place_order(&mut customer, vec![item]).unwrap();

        assert_eq!(customer.reward_points(), Money::from_units(5));
        assert_eq!(order.total(), Money::from_units(10));
        assert_eq!(order.customer_id(), customer.id());
    }

    #[test]
    fn test_reward_points_keep_fractions_of_odd_totals() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let item = OrderItem::new("i1", "p1", "Item 1", Money::from_units(15), 1).unwrap();
        OrderService::place_order(&mut customer, vec![item]).unwrap();
        assert_eq!(customer.reward_points(), Money::from_cents(750));

        let item = OrderItem::new("i2", "p1", "Item 1", Money::from_cents(199), 1).unwrap();
        OrderService::place_order(&mut customer, vec![item]).unwrap();
        assert_eq!(customer.reward_points(), Money::from_cents(849));
    }

    #[test]
    fn test_place_order_without_items_fails() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();

        assert_eq!(err, DomainError::OrderMustHaveItems);
        assert_eq!(customer.reward_points(), Money::zero());
    }

    #[test]
    fn test_reward_points_accumulate_across_orders() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        for id in ["i1", "i2"] {
            let item = OrderItem::new(id, "p1", "Item", Money::from_units(40), 1).unwrap();
            OrderService::place_order(&mut customer, vec![item]).unwrap();
        }
        assert_eq!(customer.reward_points(), Money::from_units(40));
    }
}
