//! Customer event handlers.

use crate::event::{Event, EventData, EventHandler, HandlerError};

/// First log line written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerCreated1;

impl EventHandler for LogWhenCustomerCreated1 {
    fn name(&self) -> &'static str {
        "LogWhenCustomerCreated1"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        if let EventData::CustomerCreated(data) = event.data() {
            tracing::info!(
                customer_id = %data.customer_id,
                "this is the first log of the CustomerCreated event"
            );
        }
        Ok(())
    }
}

/// Second log line written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerCreated2;

impl EventHandler for LogWhenCustomerCreated2 {
    fn name(&self) -> &'static str {
        "LogWhenCustomerCreated2"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        if let EventData::CustomerCreated(data) = event.data() {
            tracing::info!(
                customer_id = %data.customer_id,
                "this is the second log of the CustomerCreated event"
            );
        }
        Ok(())
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerAddressChanged;

impl EventHandler for LogWhenCustomerAddressChanged {
    fn name(&self) -> &'static str {
        "LogWhenCustomerAddressChanged"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        if let EventData::CustomerAddressChanged(data) = event.data() {
            tracing::info!(
                customer_id = %data.customer_id,
                "address of customer {}, {} changed to: {}",
                data.customer_id,
                data.name,
                data.address
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Customer;
    use crate::event::handlers::log_capture::capture_logs;
    use crate::product::Product;
    use crate::value_objects::{Address, Money};

    #[test]
    fn created_handlers_log_their_line() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let created = Event::customer_created(&customer);

        let lines = capture_logs(|| {
            LogWhenCustomerCreated1.handle(&created).unwrap();
            LogWhenCustomerCreated2.handle(&created).unwrap();
        });

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("this is the first log of the CustomerCreated event"));
        assert!(lines[1].contains("this is the second log of the CustomerCreated event"));
        assert!(lines.iter().all(|l| l.contains("INFO") && l.contains("customer_id=c1")));
    }

    #[test]
    fn address_handler_logs_the_new_address() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let address = Address::new("Street 1", 1, "12345", "City 1").unwrap();
        let changed = Event::customer_address_changed(&customer, address);

        let lines = capture_logs(|| LogWhenCustomerAddressChanged.handle(&changed).unwrap());

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("address of customer c1, Customer 1 changed to: Street 1, 1, 12345 City 1"));
    }

    #[test]
    fn customer_handlers_ignore_other_events() {
        let product = Product::new("p1", "Product 1", Money::from_units(1)).unwrap();
        let event = Event::product_created(&product);

        let lines = capture_logs(|| {
            LogWhenCustomerCreated1.handle(&event).unwrap();
            LogWhenCustomerCreated2.handle(&event).unwrap();
            LogWhenCustomerAddressChanged.handle(&event).unwrap();
        });

        assert!(lines.is_empty());
    }
}
