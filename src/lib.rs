//! In-process publish/subscribe event dispatching.
//!
//! Components ([`EventSubscriber`]s) declare interest in named events with a
//! priority; an [`EventDispatcher`] invokes the matching callbacks in
//! descending priority order when an event of that name is dispatched, until
//! the list is exhausted or a callback stops propagation on the event.
//!
//! Dispatch is synchronous and in-call-stack: a callback runs to completion
//! before the next is considered, and a panic inside a callback unwinds to
//! the publisher exactly as a direct call would. Callers needing to share one
//! dispatcher across threads use [`SharedEventDispatcher`].

pub mod dispatcher;
pub mod error;
pub mod subscriber;
pub mod types;

use std::any::Any;
use std::fmt;

/// Result of a dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Every registered callback for the event name was invoked.
    Continue,
    /// A callback stopped propagation; the remaining callbacks were skipped.
    Stop,
}

/// Core event trait.
///
/// The dispatcher depends only on the propagation-control capability; payload
/// types compose a [`BasicEvent`](types::BasicEvent) and delegate these
/// methods to it. An event instance is scoped to a single dispatch call.
pub trait Event: Any + fmt::Debug + Send + Sync {
    /// Whether a callback has stopped propagation of this event.
    fn is_propagation_stopped(&self) -> bool;

    /// Stop propagation: no further callbacks run for the current dispatch
    /// call. Idempotent, and irreversible for this event instance. Takes
    /// `&self` because callbacks observe the event through a shared
    /// reference.
    fn stop_propagation(&self);

    /// Cast to Any for downcasting to a concrete payload type
    fn as_any(&self) -> &dyn Any;
}

/// Callback function type: invoked with the event being dispatched. The
/// receiving subscriber is captured by the closure at construction time.
pub type EventHandler = Box<dyn Fn(&dyn Event) + Send + Sync>;

/// Re-export important types
pub use dispatcher::{EventDispatcher, SharedEventDispatcher, create_dispatcher};
pub use error::EventSystemError;
pub use subscriber::{EventCallback, EventSubscriber};
pub use types::BasicEvent;

// Test module declaration
#[cfg(test)]
mod tests;
