//! Single-slot pending-event buffer.
//!
//! The engine buffers at most one event between ticks. The slot is an
//! explicit sum type so the overwrite-on-put and take-and-clear semantics
//! are a visible part of the contract rather than a flag side-effect.

use serde::{Deserialize, Serialize};

/// Nullable container holding at most one pending event.
///
/// Capacity is exactly one. Putting into an occupied slot discards the
/// older event; there is no FIFO ordering across puts. `put` reports the
/// displaced event so callers can observe the loss.
///
/// # Example
///
/// ```rust
/// use tactile::core::EventSlot;
///
/// let mut slot = EventSlot::new();
/// assert!(slot.is_empty());
///
/// assert_eq!(slot.put('a'), None);
/// assert_eq!(slot.put('b'), Some('a')); // 'a' is lost
///
/// assert_eq!(slot.take(), Some('b'));
/// assert_eq!(slot.take(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventSlot<E> {
    /// No event pending.
    Empty,
    /// One event awaiting dispatch.
    Pending(E),
}

impl<E> EventSlot<E> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Store an event, returning any displaced unconsumed event.
    ///
    /// The overwrite is intentional: producers racing within one poll
    /// cycle resolve to whichever put last.
    pub fn put(&mut self, event: E) -> Option<E> {
        match std::mem::replace(self, Self::Pending(event)) {
            Self::Empty => None,
            Self::Pending(old) => Some(old),
        }
    }

    /// Take the pending event, leaving the slot empty.
    pub fn take(&mut self) -> Option<E> {
        match std::mem::replace(self, Self::Empty) {
            Self::Empty => None,
            Self::Pending(event) => Some(event),
        }
    }

    /// Borrow the pending event without consuming it.
    pub fn peek(&self) -> Option<&E> {
        match self {
            Self::Empty => None,
            Self::Pending(event) => Some(event),
        }
    }

    /// Check whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<E> Default for EventSlot<E> {
    fn default() -> Self {
        Self::Empty
    }
}
