//! Expiry scheduling.
//!
//! One min-heap of deadlines per field replaces a timer registration per
//! particle. The owner drains due entries whenever simulated time advances.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nightsky_foundation::{ParticleId, Timestamp};

/// A scheduled removal.
///
/// Ordered by time, then by scheduling order, so equal deadlines pop in the
/// order they were scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    /// When the particle expires.
    pub at: Timestamp,
    /// Scheduling sequence number (tie-breaker).
    pub seq: u64,
    /// The particle to remove.
    pub id: ParticleId,
}

/// Min-heap of pending expiries.
#[derive(Clone, Debug, Default)]
pub struct ExpiryQueue {
    heap: BinaryHeap<Reverse<Deadline>>,
    next_seq: u64,
}

impl ExpiryQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` for removal at `at`.
    pub fn schedule(&mut self, id: ParticleId, at: Timestamp) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Deadline { at, seq, id }));
    }

    /// The earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.heap.peek().map(|Reverse(d)| d.at)
    }

    /// Pops the earliest deadline if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Timestamp) -> Option<Deadline> {
        if self.next_deadline()? <= now {
            self.heap.pop().map(|Reverse(d)| d)
        } else {
            None
        }
    }

    /// Pops every deadline due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Timestamp) -> Vec<Deadline> {
        let mut due = Vec::new();
        while let Some(deadline) = self.pop_due(now) {
            due.push(deadline);
        }
        due
    }

    /// Cancels every pending deadline, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.heap.len();
        self.heap.clear();
        count
    }

    /// Number of pending deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
