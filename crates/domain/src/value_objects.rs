//! Value objects shared by the storefront entities.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = 10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from whole currency units.
    ///
    /// Saturates at the bounds of the cent range.
    pub fn from_units(units: i64) -> Self {
        Self {
            cents: units.saturating_mul(100),
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-unit portion.
    pub fn units(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after units).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity, or `None` if the result leaves the cent range.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Adds two amounts, or `None` if the result leaves the cent range.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Returns this amount raised by `percentage` percent, truncated to the cent.
    ///
    /// `None` if the result leaves the cent range.
    pub fn checked_increase_by_percent(&self, percentage: i64) -> Option<Money> {
        let delta = i128::from(self.cents) * i128::from(percentage) / 100;
        i64::try_from(i128::from(self.cents) + delta)
            .ok()
            .map(Money::from_cents)
    }

    /// Returns half of this amount, truncated to the cent.
    pub fn half(&self) -> Money {
        Money {
            cents: self.cents / 2,
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Addition saturates; use `checked_add` where overflow must be rejected.
impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents = self.cents.saturating_add(rhs.cents);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// Street, zip, and city must not be blank, and the house number must not
    /// be zero.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.street.trim().is_empty() {
            return Err(DomainError::required("Address", "street"));
        }
        if self.number == 0 {
            return Err(DomainError::required("Address", "number"));
        }
        if self.zip.trim().is_empty() {
            return Err(DomainError::required("Address", "zip"));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::required("Address", "city"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.units(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "12.34");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-12.34");
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_units(4), Money::from_units(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(7));
    }

    #[test]
    fn test_money_sum_saturates() {
        let total: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_money_checked_mul() {
        assert_eq!(
            Money::from_cents(250).checked_mul(3),
            Some(Money::from_cents(750))
        );
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul(3), None);
    }

    #[test]
    fn test_money_checked_add() {
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_money_increase_by_percent() {
        assert_eq!(
            Money::from_units(100).checked_increase_by_percent(10),
            Some(Money::from_units(110))
        );
        assert_eq!(
            Money::from_units(100).checked_increase_by_percent(-50),
            Some(Money::from_units(50))
        );
        assert_eq!(
            Money::from_cents(i64::MAX / 2).checked_increase_by_percent(150),
            None
        );
    }

    #[test]
    fn test_money_half_keeps_cents() {
        assert_eq!(Money::from_units(15).half(), Money::from_cents(750));
        assert_eq!(Money::from_cents(4550).half(), Money::from_cents(2275));
        assert_eq!(Money::from_cents(199).half(), Money::from_cents(99));
    }

    #[test]
    fn test_address_requires_every_field() {
        assert_eq!(
            Address::new("", 1, "12345", "City"),
            Err(DomainError::required("Address", "street"))
        );
        assert_eq!(
            Address::new("Street 1", 0, "12345", "City"),
            Err(DomainError::required("Address", "number"))
        );
        assert_eq!(
            Address::new("Street 1", 1, " ", "City"),
            Err(DomainError::required("Address", "zip"))
        );
        assert_eq!(
            Address::new("Street 1", 1, "12345", ""),
            Err(DomainError::required("Address", "city"))
        );
    }

    #[test]
    fn test_address_display() {
        let address = Address::new("Street 1", 1, "13330-250", "São Paulo").unwrap();
        assert_eq!(address.to_string(), "Street 1, 1, 13330-250 São Paulo");
    }
}
