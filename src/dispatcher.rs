use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::EventSystemError;
use crate::subscriber::{EventCallback, EventSubscriber};
use crate::{Event, EventResult};

//--------------------------------------------------
// EventDispatcher (single-threaded owner)
//--------------------------------------------------

/// Event dispatcher owning the registration table: a mapping from event name
/// to the priority-ordered list of callback entries registered for it.
///
/// One instance per logical scope, constructed and passed explicitly by the
/// host; never a singleton. Registration and removal take `&mut self`,
/// dispatch takes `&self`, so mutation during an in-flight dispatch is ruled
/// out by the borrow rules. For cross-thread sharing (and re-entrant
/// registration from inside a callback) wrap it in
/// [`SharedEventDispatcher`].
pub struct EventDispatcher {
    callbacks: HashMap<String, Vec<Arc<EventCallback>>>,
}

// Manual Debug implementation for EventDispatcher
impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let callback_count: usize = self.callbacks.values().map(|v| v.len()).sum();
        f.debug_struct("EventDispatcher")
            .field("event_names", &self.callbacks.len())
            .field("callback_count", &callback_count)
            .finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }

    /// Register every callback entry a subscriber declares, then re-sort the
    /// affected lists by descending priority.
    ///
    /// The same event name may receive entries from arbitrarily many
    /// subscribers; no uniqueness check is performed. A subscriber declaring
    /// zero callbacks is a no-op.
    pub fn register_subscriber(&mut self, subscriber: &dyn EventSubscriber) {
        for callback in subscriber.subscribed_events() {
            self.add_listener(callback);
        }
        self.sort_callbacks();
    }

    /// Insert a single callback entry under its event name, creating the
    /// list if absent.
    ///
    /// Lower-level primitive used by [`register_subscriber`]; it does not
    /// re-sort. The table stays valid and dispatchable, but ordering is not
    /// guaranteed until the next bulk registration or removal sorts it.
    ///
    /// [`register_subscriber`]: EventDispatcher::register_subscriber
    pub fn add_listener(&mut self, callback: Arc<EventCallback>) {
        log::trace!(
            "Adding listener for '{}' at priority {}",
            callback.event_name(),
            callback.priority()
        );
        self.callbacks
            .entry(callback.event_name().to_owned())
            .or_default()
            .push(callback);
    }

    /// Dispatch `event` to every callback registered under `event_name`, in
    /// descending priority order.
    ///
    /// An unknown event name is a normal, silent no-op. After each
    /// invocation the event's propagation flag is checked; once stopped, the
    /// remaining entries (equal or lower priority) are skipped and
    /// [`EventResult::Stop`] is returned. Callback panics are not caught;
    /// they unwind to the caller.
    pub fn dispatch(&self, event_name: &str, event: &dyn Event) -> EventResult {
        let Some(callbacks) = self.callbacks.get(event_name) else {
            log::trace!("No callbacks registered for '{}'", event_name);
            return EventResult::Continue;
        };

        for callback in callbacks {
            callback.invoke(event);
            if event.is_propagation_stopped() {
                log::debug!(
                    "Propagation of '{}' stopped at priority {}",
                    event_name,
                    callback.priority()
                );
                return EventResult::Stop;
            }
        }
        EventResult::Continue
    }

    /// True iff the table holds a key for `event_name`, even when its list
    /// has been emptied by removals.
    pub fn has_callbacks(&self, event_name: &str) -> bool {
        self.callbacks.contains_key(event_name)
    }

    /// Snapshot of the callback list for `event_name` in its current
    /// dispatch order, or `None` for an unknown name.
    pub fn callbacks_for(&self, event_name: &str) -> Option<Vec<Arc<EventCallback>>> {
        self.callbacks.get(event_name).cloned()
    }

    /// Remove every callback entry a subscriber declares, then re-sort the
    /// remaining lists.
    ///
    /// Matching is by entry identity, so another subscriber's entries
    /// survive even when they share an event name and priority. Removing a
    /// subscriber that was never registered is a no-op.
    pub fn remove_subscriber(&mut self, subscriber: &dyn EventSubscriber) {
        for callback in subscriber.subscribed_events() {
            self.remove_listener(&callback);
        }
        self.sort_callbacks();
    }

    /// Remove a single callback entry, located within its event name's list
    /// by `Arc` identity.
    ///
    /// No-op if the event name is unknown or the entry is not present. The
    /// event name's key stays in the table even when its last entry is
    /// removed.
    pub fn remove_listener(&mut self, callback: &Arc<EventCallback>) {
        let Some(list) = self.callbacks.get_mut(callback.event_name()) else {
            return;
        };
        if let Some(pos) = list.iter().position(|c| Arc::ptr_eq(c, callback)) {
            log::trace!(
                "Removing listener for '{}' at priority {}",
                callback.event_name(),
                callback.priority()
            );
            list.remove(pos);
        }
    }

    // Stable sort: entries of equal priority keep their relative
    // registration order across re-sorts.
    fn sort_callbacks(&mut self) {
        for list in self.callbacks.values_mut() {
            list.sort_by(|a, b| b.priority().cmp(&a.priority()));
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//--------------------------------------------------
// SharedEventDispatcher (cross-thread wrapper)
//--------------------------------------------------

/// Thread-safe shared event dispatcher guarding one [`EventDispatcher`]
/// behind a mutex. Clones share the same registration table.
#[derive(Clone)]
pub struct SharedEventDispatcher {
    dispatcher: Arc<Mutex<EventDispatcher>>,
}

// Manual Debug impl for SharedEventDispatcher
impl fmt::Debug for SharedEventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEventDispatcher").finish_non_exhaustive()
    }
}

impl SharedEventDispatcher {
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(Mutex::new(EventDispatcher::new())),
        }
    }

    fn lock(
        &self,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, EventDispatcher>, EventSystemError> {
        self.dispatcher
            .lock()
            .map_err(|_| EventSystemError::DispatcherPoisoned { operation })
    }

    /// Dispatch against a snapshot of the callback list taken under the
    /// lock; the lock is released before any callback runs, so a callback
    /// may re-enter this dispatcher to register or unregister without
    /// deadlocking. Entries added or removed mid-dispatch take effect from
    /// the next dispatch call.
    pub fn dispatch(
        &self,
        event_name: &str,
        event: &dyn Event,
    ) -> Result<EventResult, EventSystemError> {
        let snapshot = match self.lock("dispatch")?.callbacks_for(event_name) {
            Some(callbacks) => callbacks,
            None => {
                log::trace!("No callbacks registered for '{}'", event_name);
                return Ok(EventResult::Continue);
            }
        };

        for callback in &snapshot {
            callback.invoke(event);
            if event.is_propagation_stopped() {
                log::debug!(
                    "Propagation of '{}' stopped at priority {}",
                    event_name,
                    callback.priority()
                );
                return Ok(EventResult::Stop);
            }
        }
        Ok(EventResult::Continue)
    }

    pub fn register_subscriber(
        &self,
        subscriber: &dyn EventSubscriber,
    ) -> Result<(), EventSystemError> {
        self.lock("register_subscriber")?
            .register_subscriber(subscriber);
        Ok(())
    }

    pub fn add_listener(&self, callback: Arc<EventCallback>) -> Result<(), EventSystemError> {
        self.lock("add_listener")?.add_listener(callback);
        Ok(())
    }

    pub fn remove_subscriber(
        &self,
        subscriber: &dyn EventSubscriber,
    ) -> Result<(), EventSystemError> {
        self.lock("remove_subscriber")?.remove_subscriber(subscriber);
        Ok(())
    }

    pub fn remove_listener(&self, callback: &Arc<EventCallback>) -> Result<(), EventSystemError> {
        self.lock("remove_listener")?.remove_listener(callback);
        Ok(())
    }

    pub fn has_callbacks(&self, event_name: &str) -> Result<bool, EventSystemError> {
        Ok(self.lock("has_callbacks")?.has_callbacks(event_name))
    }
}

impl Default for SharedEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//--------------------------------------------------
// Helper Functions
//--------------------------------------------------

/// Create a new shared event dispatcher instance
pub fn create_dispatcher() -> SharedEventDispatcher {
    SharedEventDispatcher::new()
}
