use std::sync::Arc;

use common::CustomerId;
use domain::{Address, Customer, Event, EventDispatcher};
use persistence::CustomerRepository;

use crate::error::Result;

/// Customer registration and profile changes.
pub struct CustomerService<R: CustomerRepository> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Creates and stores a customer, then notifies `CustomerCreated`.
    ///
    /// The customer stays stored if a handler fails afterwards.
    #[tracing::instrument(skip_all, fields(customer_id))]
    pub async fn register(
        &self,
        id: impl Into<CustomerId>,
        name: impl Into<String>,
    ) -> Result<Customer> {
        let customer = Customer::new(id, name)?;
        tracing::Span::current().record("customer_id", customer.id().as_str());

        self.repository.create(&customer).await?;
        self.dispatcher.notify(&Event::customer_created(&customer))?;

        tracing::info!("customer registered");
        Ok(customer)
    }

    /// Moves a stored customer to `address`, then notifies `CustomerAddressChanged`.
    #[tracing::instrument(skip(self, address), fields(customer_id = %id))]
    pub async fn change_address(&self, id: &CustomerId, address: Address) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.change_address(address.clone());
        self.repository.update(&customer).await?;

        self.dispatcher
            .notify(&Event::customer_address_changed(&customer, address))?;
        Ok(customer)
    }

    /// Activates a stored customer. Requires an address.
    #[tracing::instrument(skip(self), fields(customer_id = %id))]
    pub async fn activate(&self, id: &CustomerId) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.activate()?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    pub async fn find(&self, id: &CustomerId) -> Result<Customer> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
