use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::Event;

/// Concrete base event carrying only the propagation-stopped flag.
///
/// Publishers dispatching a signal with no payload use it directly; payload
/// event types embed a `BasicEvent` field and delegate
/// [`is_propagation_stopped`](Event::is_propagation_stopped) and
/// [`stop_propagation`](Event::stop_propagation) to it.
///
/// The flag is an `AtomicBool` because callbacks receive the event as a
/// shared `&dyn Event` and must still be able to set it.
#[derive(Debug, Default)]
pub struct BasicEvent {
    propagation_stopped: AtomicBool,
}

impl BasicEvent {
    /// Create a new event with propagation not stopped.
    pub fn new() -> Self {
        Self {
            propagation_stopped: AtomicBool::new(false),
        }
    }
}

impl Event for BasicEvent {
    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.load(Ordering::SeqCst)
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.store(true, Ordering::SeqCst);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
