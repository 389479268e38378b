//! Handlers shipped with the domain.

mod customer;
#[cfg(test)]
mod log_capture;
mod product;

use std::sync::Arc;

pub use customer::{LogWhenCustomerAddressChanged, LogWhenCustomerCreated1, LogWhenCustomerCreated2};
pub use product::SendEmailWhenProductCreated;

use super::{EventDispatcher, EventKind};

/// Registers every shipped handler on `dispatcher`.
pub fn register_defaults(dispatcher: &mut EventDispatcher) {
    dispatcher.register(EventKind::CustomerCreated, Arc::new(LogWhenCustomerCreated1));
    dispatcher.register(EventKind::CustomerCreated, Arc::new(LogWhenCustomerCreated2));
    dispatcher.register(
        EventKind::CustomerAddressChanged,
        Arc::new(LogWhenCustomerAddressChanged),
    );
    dispatcher.register(EventKind::ProductCreated, Arc::new(SendEmailWhenProductCreated));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_kind() {
        let mut dispatcher = EventDispatcher::new();
        register_defaults(&mut dispatcher);

        assert_eq!(dispatcher.handler_count(EventKind::CustomerCreated), 2);
        assert_eq!(dispatcher.handler_count(EventKind::CustomerAddressChanged), 1);
        assert_eq!(dispatcher.handler_count(EventKind::ProductCreated), 1);

        let names: Vec<_> = dispatcher
            .handlers(EventKind::CustomerCreated)
            .iter()
            .map(|h| h.name())
            .collect();
        assert_eq!(names, vec!["LogWhenCustomerCreated1", "LogWhenCustomerCreated2"]);
    }

    #[test]
    fn defaults_log_in_registration_order() {
        use crate::customer::Customer;
        use crate::event::Event;
        use crate::product::Product;
        use crate::value_objects::{Address, Money};

        let mut dispatcher = EventDispatcher::new();
        register_defaults(&mut dispatcher);

        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let address = Address::new("Street 1", 1, "12345", "City 1").unwrap();
        customer.change_address(address.clone());
        let product = Product::new("p1", "Product 1", Money::from_units(10)).unwrap();

        let lines = log_capture::capture_logs(|| {
            dispatcher.notify(&Event::customer_created(&customer)).unwrap();
            dispatcher
                .notify(&Event::customer_address_changed(&customer, address))
                .unwrap();
            dispatcher.notify(&Event::product_created(&product)).unwrap();
        });

        let expected = [
            "this is the first log of the CustomerCreated event",
            "this is the second log of the CustomerCreated event",
            "address of customer c1, Customer 1 changed to: Street 1, 1, 12345 City 1",
            "sending email: product Product 1 is now available",
        ];
        assert_eq!(lines.len(), expected.len(), "{lines:#?}");
        for (line, message) in lines.iter().zip(expected) {
            assert!(line.contains(message), "{line:?} should contain {message:?}");
        }
    }
}
