//! Event handler contract.

use thiserror::Error;

use super::Event;

/// Reason a handler could not process an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HandlerError {
    reason: String,
}

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A callback invoked synchronously by the dispatcher for matching events.
///
/// Handlers run in registration order on the notifying thread. Returning an
/// error stops the remaining handlers for that event.
pub trait EventHandler: Send + Sync {
    /// Returns the name of this handler, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Reacts to a single event.
    fn handle(&self, event: &Event) -> Result<(), HandlerError>;
}
