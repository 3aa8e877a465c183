//! Generic change-notification source.
//!
//! [`EventSource`] is a minimal publish/subscribe relation: listeners
//! register a callback and receive every subsequently emitted event
//! until they deregister. It backs the per-participant change sources
//! a zone wires its dispatch handlers into while the participant is a
//! member.
//!
//! # Locking
//!
//! The listener list sits behind a narrow mutex. [`emit`] clones the
//! callback `Arc`s out of the lock and invokes them with the lock
//! released, so a slow listener (fan-out ends in network-facing code)
//! never blocks concurrent subscribe/unsubscribe or other emitters.
//! Consequence: a listener deregistered mid-emit may still observe that
//! in-flight event. Callers that need a hard cut-off must tolerate one
//! trailing delivery, which the zone's notifier boundary does.
//!
//! [`emit`]: EventSource::emit

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use smallvec::SmallVec;

/// Counter for unique [`ListenerId`] allocation.
static LISTENER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one subscription on one [`EventSource`].
///
/// Allocated from a process-wide monotonic counter, so a handle from
/// one source never aliases a handle from another. Required to
/// deregister; there is no deregister-by-callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(LISTENER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A single-event-type notification source.
///
/// Listener storage is a `SmallVec` of capacity 2: a participant's
/// sources carry one listener while in a zone and none outside, so the
/// list never touches the heap in normal operation.
pub struct EventSource<E> {
    listeners: Mutex<SmallVec<[(ListenerId, Callback<E>); 2]>>,
}

impl<E> EventSource<E> {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(SmallVec::new()),
        }
    }

    /// Register a callback; returns the handle needed to deregister it.
    ///
    /// Registration is not idempotent: subscribing the same logical
    /// handler twice yields two subscriptions and double delivery.
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = ListenerId::next();
        self.listeners.lock().push((id, Arc::new(callback)));
        id
    }

    /// Deregister a callback by handle.
    ///
    /// Returns whether a subscription was removed. `false` means the
    /// handle was never registered here or was already removed — a
    /// pairing bug in the caller.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Deliver `event` to every currently registered listener.
    ///
    /// Callbacks run on the emitting thread, outside the listener-list
    /// lock, in registration order. Emission with zero listeners is a
    /// no-op, not an error.
    pub fn emit(&self, event: &E) {
        let snapshot: SmallVec<[Callback<E>; 2]> = {
            let listeners = self.listeners.lock();
            listeners.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in &snapshot {
            callback(event);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
