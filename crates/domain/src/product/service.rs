//! Pricing operations over many products.

use crate::error::DomainError;

use super::Product;

/// Stateless operations on product collections.
pub struct ProductService;

impl ProductService {
    /// Raises the price of every product by `percentage` percent.
    ///
    /// Percentages of -100 or less, and increases that would push a price out
    /// of range, are rejected before any product is touched.
    #[tracing::instrument(skip(products), fields(count = products.len()))]
    pub fn increase_price(products: &mut [Product], percentage: i64) -> Result<(), DomainError> {
        if percentage <= -100 {
            return Err(DomainError::InvalidPercentage(percentage));
        }

        let new_prices = products
            .iter()
            .map(|product| {
                product
                    .price()
                    .checked_increase_by_percent(percentage)
                    .ok_or(DomainError::AmountOverflow { entity: "Product" })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (product, new_price) in products.iter_mut().zip(new_prices) {
            product.change_price(new_price)?;
        }

        Ok(())
    }
}
