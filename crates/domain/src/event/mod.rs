//! Domain events and their in-process dispatch.

mod dispatcher;
mod domain_event;
mod handler;
pub mod handlers;

pub use dispatcher::{DispatchError, EventDispatcher};
pub use domain_event::{
    CustomerAddressChangedData, CustomerCreatedData, Event, EventData, EventKind,
    ProductCreatedData,
};
pub use handler::{EventHandler, HandlerError};
