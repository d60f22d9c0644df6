use std::fmt;
use std::sync::Arc;

use crate::{Event, EventHandler};

/// A registered callback entry: an event name, a priority, and the handler
/// to invoke.
///
/// Entries are always handled through `Arc<EventCallback>`; the `Arc`
/// pointer is the entry's identity, which is what
/// [`remove_listener`](crate::EventDispatcher::remove_listener) matches on.
/// Two entries with identical name, priority, and handler are still distinct
/// entries. Name and priority are immutable after construction; there is no
/// re-prioritization of a live entry.
pub struct EventCallback {
    event_name: String,
    priority: i32,
    handler: EventHandler,
}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCallback")
            .field("event_name", &self.event_name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl EventCallback {
    /// Create a new callback entry for `event_name` at `priority`.
    ///
    /// The handler closure captures its receiver (the subscriber state it
    /// acts on) at construction time, so it is invoked with only the event.
    /// Higher priorities are dispatched earlier.
    pub fn new<N, F>(event_name: N, priority: i32, handler: F) -> Arc<Self>
    where
        N: Into<String>,
        F: Fn(&dyn Event) + Send + Sync + 'static,
    {
        Arc::new(Self {
            event_name: event_name.into(),
            priority,
            handler: Box::new(handler),
        })
    }

    /// Name of the event this entry reacts to.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Dispatch priority; higher runs first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Invoke the handler with the event being dispatched.
    pub fn invoke(&self, event: &dyn Event) {
        (self.handler)(event)
    }
}

/// A component declaring interest in one or more named events.
///
/// The returned list must be stable for the lifetime of a registration: the
/// dispatcher queries it again at removal time and matches the entries by
/// `Arc` identity, so subscribers build their callbacks once and hand out
/// clones of the same `Arc`s on every call.
pub trait EventSubscriber: Send + Sync {
    /// The subscriber's declared callback entries.
    fn subscribed_events(&self) -> Vec<Arc<EventCallback>>;
}
