//! Customer entity.

use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Address, Money};

/// A customer of the store.
///
/// Customers start inactive and without an address. An address must be set
/// before the customer can be activated. Reward points accumulate as orders
/// are placed and are kept as a money amount, to the cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: Money,
}

impl Customer {
    /// Creates a new customer. Both id and name are required.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: Money::zero(),
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::required("Customer", "id"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::required("Customer", "name"));
        }
        Ok(())
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> Money {
        self.reward_points
    }

    /// Renames the customer. The new name must not be blank.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::required("Customer", "name"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer.
    ///
    /// Fails with [`DomainError::AddressRequired`] when no address is set.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::AddressRequired {
                customer_id: self.id.clone(),
            });
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: Money) {
        self.reward_points += points;
    }
}
