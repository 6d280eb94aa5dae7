// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers keyed by deadline.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A set of pending one-shot timers carrying an event of type `E`.
///
/// Entries fire in deadline order; entries sharing a deadline fire in the
/// order they were scheduled. Cancelling an entry that already fired or
/// was already cancelled is a no-op.
#[derive(Debug)]
pub struct Timers<E> {
    queue: BTreeMap<(Instant, u64), E>,
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }
}

/// A timer whose deadline has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired<E> {
    pub id: TimerId,
    pub deadline: Instant,
    pub event: E,
}

impl<E> Timers<E> {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((deadline, seq), event);
        self.deadlines.insert(seq, deadline);
        TimerId(seq)
    }

    /// Cancels a pending timer, returning its event.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        let deadline = self.deadlines.remove(&id.0)?;
        self.queue.remove(&(deadline, id.0))
    }

    /// Returns whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    /// Removes and returns the earliest timer due at `now`, if any.
    pub fn pop_next_due(&mut self, now: Instant) -> Option<Expired<E>> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let event = self.queue.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        Some(Expired {
            id: TimerId(seq),
            deadline,
            event,
        })
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<Expired<E>> {
        std::iter::from_fn(|| self.pop_next_due(now)).collect()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|(&(deadline, _), _)| deadline)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}
