//! Order aggregate implementation.

use common::{CustomerId, OrderId, OrderItemId};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Money;

use super::OrderItem;

/// Order aggregate root.
///
/// An order always belongs to a customer and always holds at least one item.
/// Item ids are unique within an order, and items keep the order in which
/// they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order with a freshly generated id.
    pub fn new(
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        Self::with_id(OrderId::generate(), customer_id, items)
    }

    /// Creates an order with a known id, e.g. when rebuilding it from storage.
    pub fn with_id(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::required("Order", "id"));
        }
        if self.customer_id.is_empty() {
            return Err(DomainError::required("Order", "customer id"));
        }
        if self.items.is_empty() {
            return Err(DomainError::OrderMustHaveItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if self.items[..index].iter().any(|other| other.id() == item.id()) {
                return Err(DomainError::DuplicateItem {
                    item_id: item.id().clone(),
                });
            }
        }
        Self::checked_total(&self.items)?;
        Ok(())
    }

    fn checked_total(items: &[OrderItem]) -> Result<Money, DomainError> {
        items
            .iter()
            .try_fold(Money::zero(), |acc, item| acc.checked_add(item.total()))
            .ok_or(DomainError::AmountOverflow { entity: "Order" })
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the items in the order they were added.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns an item by id.
    pub fn get_item(&self, item_id: &OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the order total: the sum of every line's price * quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }
}

// Mutators
impl Order {
    /// Appends an item to the order.
    ///
    /// Fails if the id is already used or the new total would overflow.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), DomainError> {
        if self.get_item(item.id()).is_some() {
            return Err(DomainError::DuplicateItem {
                item_id: item.id().clone(),
            });
        }
        Self::checked_total(&self.items)?
            .checked_add(item.total())
            .ok_or(DomainError::AmountOverflow { entity: "Order" })?;
        self.items.push(item);
        Ok(())
    }

    /// Removes an item by id.
    ///
    /// Removing the only remaining item fails with
    /// [`DomainError::OrderMustHaveItems`] and leaves the order unchanged; add
    /// the replacement first.
    pub fn remove_item(&mut self, item_id: &OrderItemId) -> Result<OrderItem, DomainError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| DomainError::ItemNotFound {
                item_id: item_id.clone(),
            })?;

        if self.items.len() == 1 {
            return Err(DomainError::OrderMustHaveItems);
        }

        Ok(self.items.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, quantity: u32) -> OrderItem {
        OrderItem::new(
            id,
            format!("p-{id}"),
            format!("Item {id}"),
            Money::from_units(price),
            quantity,
        )
        .unwrap()
    }

    #[test]
    fn test_order_requires_customer_id() {
        let err = Order::new("", vec![item("i1", 100, 1)]).unwrap_err();
        assert_eq!(err, DomainError::required("Order", "customer id"));
    }

    #[test]
    fn test_order_requires_items() {
        let err = Order::new("c1", vec![]).unwrap_err();
        assert_eq!(err, DomainError::OrderMustHaveItems);
        assert_eq!(err.to_string(), "Order must have at least one item");
    }

    #[test]
    fn test_order_rejects_duplicate_item_ids() {
        let err = Order::new("c1", vec![item("i1", 100, 1), item("i1", 50, 2)]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateItem { .. }));
    }

    #[test]
    fn test_order_total() {
        let order = Order::new("c1", vec![item("i1", 100, 2), item("i2", 200, 2)]).unwrap();
        assert_eq!(order.total(), Money::from_units(600));
    }

    #[test]
    fn test_order_rejects_total_overflow() {
        let big = |id: &str| {
            OrderItem::new(id, "p1", "Item", Money::from_cents(i64::MAX / 2), 2).unwrap()
        };

        let err = Order::new("c1", vec![big("i1"), big("i2")]).unwrap_err();
        assert_eq!(err, DomainError::AmountOverflow { entity: "Order" });

        let mut order = Order::new("c1", vec![big("i1")]).unwrap();
        let err = order.add_item(big("i2")).unwrap_err();
        assert_eq!(err, DomainError::AmountOverflow { entity: "Order" });
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.total(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn test_add_item_updates_total() {
        let mut order = Order::new("c1", vec![item("i1", 100, 1)]).unwrap();
        order.add_item(item("i2", 300, 3)).unwrap();
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total(), Money::from_units(1000));

        let err = order.add_item(item("i2", 1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateItem { .. }));
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut order = Order::new("c1", vec![item("i1", 100, 1), item("i2", 300, 3)]).unwrap();
        let removed = order.remove_item(&OrderItemId::new("i1")).unwrap();
        assert_eq!(removed.id().as_str(), "i1");
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), Money::from_units(900));
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut order = Order::new("c1", vec![item("i1", 100, 1), item("i2", 300, 3)]).unwrap();
        let err = order.remove_item(&OrderItemId::new("nope")).unwrap_err();
        assert_eq!(
            err,
            DomainError::ItemNotFound {
                item_id: OrderItemId::new("nope")
            }
        );
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_remove_last_item_fails_and_leaves_order_unchanged() {
        let mut order = Order::new("c1", vec![item("i1", 100, 1)]).unwrap();
        let before = order.clone();

        let err = order.remove_item(&OrderItemId::new("i1")).unwrap_err();

        assert_eq!(err, DomainError::OrderMustHaveItems);
        assert_eq!(order, before);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut order = Order::new("c1", vec![item("b", 1, 1)]).unwrap();
        order.add_item(item("a", 1, 1)).unwrap();
        order.add_item(item("c", 1, 1)).unwrap();
        let ids: Vec<_> = order.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
