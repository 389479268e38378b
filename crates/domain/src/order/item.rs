//! Order line items.

use common::{OrderItemId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Money;

/// A line in an order: a product, the unit price it was sold at, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    product_id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
}

impl OrderItem {
    /// Creates a validated order item.
    ///
    /// Id, product id, and name are required; the unit price must not be
    /// negative, the quantity must be at least one, and the line total must
    /// fit in the cent range.
    pub fn new(
        id: impl Into<OrderItemId>,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::required("OrderItem", "id"));
        }
        if self.product_id.is_empty() {
            return Err(DomainError::required("OrderItem", "product id"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::required("OrderItem", "name"));
        }
        if self.price.is_negative() {
            return Err(DomainError::NegativePrice {
                entity: "OrderItem",
                cents: self.price.cents(),
            });
        }
        if self.quantity == 0 {
            return Err(DomainError::InvalidQuantity {
                item_id: self.id.clone(),
            });
        }
        if self.price.checked_mul(self.quantity).is_none() {
            return Err(DomainError::AmountOverflow { entity: "OrderItem" });
        }
        Ok(())
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the line total (price * quantity).
    pub fn total(&self) -> Money {
        Money::from_cents(self.price.cents().saturating_mul(i64::from(self.quantity)))
    }
}
