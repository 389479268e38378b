//! Product entity and catalog-wide pricing.

mod service;

pub use service::ProductService;

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Money;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product. The price may be zero but not negative.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::required("Product", "id"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::required("Product", "name"));
        }
        check_price(self.price)
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::required("Product", "name"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), DomainError> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn check_price(price: Money) -> Result<(), DomainError> {
    if price.is_negative() {
        return Err(DomainError::NegativePrice {
            entity: "Product",
            cents: price.cents(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_requires_id_and_name() {
        assert_eq!(
            Product::new("", "Product 1", Money::from_units(100)).unwrap_err(),
            DomainError::required("Product", "id")
        );
        assert_eq!(
            Product::new("123", "", Money::from_units(100)).unwrap_err(),
            DomainError::required("Product", "name")
        );
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let err = Product::new("123", "Product 1", Money::from_cents(-1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::NegativePrice {
                entity: "Product",
                cents: -1
            }
        );
    }

    #[test]
    fn test_product_accepts_zero_price() {
        let product = Product::new("123", "Free sample", Money::zero()).unwrap();
        assert_eq!(product.price(), Money::zero());
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 1", Money::from_units(100)).unwrap();
        product.change_name("Product 2").unwrap();
        product.change_price(Money::from_units(150)).unwrap();
        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), Money::from_units(150));

        assert!(product.change_price(Money::from_cents(-100)).is_err());
        assert_eq!(product.price(), Money::from_units(150));
    }
}
