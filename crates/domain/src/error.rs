//! Domain error types.

use common::{CustomerId, OrderItemId};
use thiserror::Error;

/// Validation and invariant violations raised by entities and domain services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was empty.
    #[error("{entity}: {field} is required")]
    Required {
        entity: &'static str,
        field: &'static str,
    },

    /// A price was below zero.
    #[error("{entity}: price must not be negative (got {cents} cents)")]
    NegativePrice { entity: &'static str, cents: i64 },

    /// An amount no longer fits in the cent range.
    #[error("{entity}: amount out of range")]
    AmountOverflow { entity: &'static str },

    /// An order item was created with a zero quantity.
    #[error("Invalid quantity for item {item_id}: must be greater than 0")]
    InvalidQuantity { item_id: OrderItemId },

    /// The operation would leave an order without items.
    #[error("Order must have at least one item")]
    OrderMustHaveItems,

    /// Item not found in order.
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: OrderItemId },

    /// An item with the same id is already part of the order.
    #[error("Item already in order: {item_id}")]
    DuplicateItem { item_id: OrderItemId },

    /// A customer cannot be activated without an address.
    #[error("Customer {customer_id}: address is mandatory to activate")]
    AddressRequired { customer_id: CustomerId },

    /// A price change would push prices below zero.
    #[error("Invalid percentage: {0} (must be greater than -100)")]
    InvalidPercentage(i64),
}

impl DomainError {
    pub(crate) fn required(entity: &'static str, field: &'static str) -> Self {
        DomainError::Required { entity, field }
    }
}
