//! Product event handlers.

use crate::event::{Event, EventData, EventHandler, HandlerError};

/// Announces a newly created product.
///
/// There is no mail transport; the notification is written to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenProductCreated;

impl EventHandler for SendEmailWhenProductCreated {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductCreated"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        if let EventData::ProductCreated(data) = event.data() {
            tracing::info!(
                product_id = %data.product_id,
                price = %data.price,
                "sending email: product {} is now available",
                data.name
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
    use crate::value_objects::Money;

    #[test]
    fn logs_the_new_product() {
        let product = Product::new("p1", "Product 1", Money::from_cents(1050)).unwrap();
        let event = Event::product_created(&product);

        let lines = capture_logs(|| SendEmailWhenProductCreated.handle(&event).unwrap());

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("sending email: product Product 1 is now available"));
        assert!(lines[0].contains("product_id=p1"));
        assert!(lines[0].contains("price=10.50"));
    }

    #[test]
    fn ignores_customer_events() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let event = Event::customer_created(&customer);

        let lines = capture_logs(|| SendEmailWhenProductCreated.handle(&event).unwrap());
        assert!(lines.is_empty());
    }
}
