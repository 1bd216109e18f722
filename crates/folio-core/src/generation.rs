//! Stale-response protection for overlapping fetch sequences.
//!
//! Every fetch sequence (a year switch, a tab switch) takes a [`Ticket`]
//! before it starts. When its result arrives it is published into a
//! [`SnapshotSlot`], which keeps it only if no newer sequence has begun in the
//! meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies one fetch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter shared by all fetches targeting one view.
#[derive(Debug, Default, Clone)]
pub struct FetchGeneration {
    latest: Arc<AtomicU64>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sequence, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` belongs to the most recent sequence.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Latest accepted value for a view.
#[derive(Debug)]
pub struct SnapshotSlot<T> {
    generation: FetchGeneration,
    value: Mutex<Option<(Ticket, Arc<T>)>>,
}

impl<T> SnapshotSlot<T> {
    pub fn new(generation: FetchGeneration) -> Self {
        Self {
            generation,
            value: Mutex::new(None),
        }
    }

    /// Starts a new fetch sequence for this slot.
    pub fn begin(&self) -> Ticket {
        self.generation.begin()
    }

    /// Stores `value` if `ticket` is still current.
    ///
    /// Returns `false` and drops the value when a newer sequence has started.
    pub fn publish(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.generation.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "discarding stale result");
            return false;
        }
        *slot = Some((ticket, Arc::new(value)));
        true
    }

    /// The most recently accepted value.
    pub fn current(&self) -> Option<Arc<T>> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, value)| Arc::clone(value))
    }
}
