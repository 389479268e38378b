//! In-process event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::{Event, EventHandler, EventKind, HandlerError};

/// A handler failed while an event was being dispatched.
///
/// Handlers registered after the failing one were not invoked.
#[derive(Debug, Error)]
#[error("handler {handler} failed while handling {kind}")]
pub struct DispatchError {
    pub kind: EventKind,
    pub handler: &'static str,
    #[source]
    pub source: HandlerError,
}

/// Routes events to the handlers registered for their kind.
///
/// The dispatcher is a plain value: build it, register handlers, then hand it
/// (usually behind an `Arc`) to whatever produces events. Registration needs
/// `&mut self`, so the registry cannot change while a `notify` is running.
///
/// Dispatch is a same-thread fan-out:
/// - handlers run in the order they were registered
/// - the same handler registered twice runs twice
/// - the first handler error aborts the rest and is returned to the caller
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler to the list for `kind`.
    pub fn register(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        tracing::debug!(%kind, handler = handler.name(), "registering event handler");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Removes the first registration of this exact handler instance for `kind`.
    ///
    /// Unknown kinds and handlers are ignored.
    pub fn unregister(&mut self, kind: EventKind, handler: &Arc<dyn EventHandler>) {
        let Some(list) = self.handlers.get_mut(&kind) else {
            return;
        };

        if let Some(position) = list.iter().position(|h| Arc::ptr_eq(h, handler)) {
            let removed = list.remove(position);
            tracing::debug!(%kind, handler = removed.name(), "unregistered event handler");
        }

        if list.is_empty() {
            self.handlers.remove(&kind);
        }
    }

    /// Removes every handler for every kind.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns the handlers registered for `kind`, in registration order.
    pub fn handlers(&self, kind: EventKind) -> &[Arc<dyn EventHandler>] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers(kind).len()
    }

    /// Returns true if no handler is registered for any kind.
    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }

    /// Delivers an event to every handler registered for its kind.
    ///
    /// Returns once all handlers have run, or at the first handler error.
    #[tracing::instrument(skip(self, event), fields(kind = %event.kind()))]
    pub fn notify(&self, event: &Event) -> Result<(), DispatchError> {
        let kind = event.kind();
        let handlers = self.handlers(kind);

        if handlers.is_empty() {
            tracing::trace!("no handlers registered");
            return Ok(());
        }

        for handler in handlers {
            if let Err(source) = handler.handle(event) {
                tracing::warn!(handler = handler.name(), error = %source, "event handler failed");
                metrics::counter!("domain_event_handler_failures", "kind" => kind.as_str())
                    .increment(1);
                return Err(DispatchError {
                    kind,
                    handler: handler.name(),
                    source,
                });
            }
        }

        metrics::counter!("domain_events_dispatched", "kind" => kind.as_str()).increment(1);
        tracing::debug!(handlers = handlers.len(), "event dispatched");

        Ok(())
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            let names: Vec<_> = self.handlers(kind).iter().map(|h| h.name()).collect();
            if !names.is_empty() {
                map.entry(&kind, &names);
            }
        }
        map.finish()
    }
}
