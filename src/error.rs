//! # Event System Errors
//!
//! Defines error types specific to the event dispatch system.
//!
//! The base dispatcher contract is deliberately infallible: dispatching an
//! unknown event name, removing an entry that was never registered, and
//! registering a subscriber with zero declared callbacks are all silent
//! no-ops. The only failure the system surfaces is a poisoned lock inside
//! [`SharedEventDispatcher`](crate::SharedEventDispatcher).
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("Attempted to operate on a poisoned event dispatcher during '{operation}'")]
    DispatcherPoisoned {
        operation: &'static str, // e.g. "dispatch", "register_subscriber"
    },
}
