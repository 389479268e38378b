//! Domain events and their payloads.

use chrono::{DateTime, Utc};
use common::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::product::Product;
use crate::value_objects::{Address, Money};

/// The kinds of event the dispatcher routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CustomerCreated,
    CustomerAddressChanged,
    ProductCreated,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 3] = [
        EventKind::CustomerCreated,
        EventKind::CustomerAddressChanged,
        EventKind::ProductCreated,
    ];

    /// Returns the event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CustomerCreated => "CustomerCreated",
            EventKind::CustomerAddressChanged => "CustomerAddressChanged",
            EventKind::ProductCreated => "ProductCreated",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an event; the variant determines the [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EventData {
    CustomerCreated(CustomerCreatedData),
    CustomerAddressChanged(CustomerAddressChangedData),
    ProductCreated(ProductCreatedData),
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            EventData::CustomerCreated(_) => EventKind::CustomerCreated,
            EventData::CustomerAddressChanged(_) => EventKind::CustomerAddressChanged,
            EventData::ProductCreated(_) => EventKind::ProductCreated,
        }
    }
}

/// Data for CustomerCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub customer_id: CustomerId,
    pub name: String,
}

/// Data for CustomerAddressChanged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChangedData {
    pub customer_id: CustomerId,
    pub name: String,

    /// The address the customer now has.
    pub address: Address,
}

/// Data for ProductCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
}

/// An immutable record of something that happened in the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    occurred_at: DateTime<Utc>,
    data: EventData,
}

impl Event {
    /// Creates an event stamped with the current time.
    pub fn new(data: EventData) -> Self {
        Self {
            occurred_at: Utc::now(),
            data,
        }
    }

    /// Creates an event with an explicit timestamp.
    pub fn at(occurred_at: DateTime<Utc>, data: EventData) -> Self {
        Self { occurred_at, data }
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }
}

// Convenience constructors for events
impl Event {
    /// Creates a CustomerCreated event.
    pub fn customer_created(customer: &Customer) -> Self {
        Self::new(EventData::CustomerCreated(CustomerCreatedData {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
        }))
    }

    /// Creates a CustomerAddressChanged event for the customer's new address.
    pub fn customer_address_changed(customer: &Customer, address: Address) -> Self {
        Self::new(EventData::CustomerAddressChanged(
            CustomerAddressChangedData {
                customer_id: customer.id().clone(),
                name: customer.name().to_string(),
                address,
            },
        ))
    }

    /// Creates a ProductCreated event.
    pub fn product_created(product: &Product) -> Self {
        Self::new(EventData::ProductCreated(ProductCreatedData {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        }))
    }
}
