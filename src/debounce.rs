// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing.
//!
//! A burst of calls whose gaps are all shorter than the wait interval
//! collapses into a single invocation carrying the arguments of the last
//! call, fired once the burst has been quiet for the full interval. There
//! is no leading-edge call.
//!
//! ```
//! use library_admin::debounce::debounce_with_clock;
//! use library_admin::timing::ManualClock;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut seen = Vec::new();
//! let mut wrapped = debounce_with_clock(|x: i32| seen.push(x), Duration::from_millis(200), clock.clone());
//!
//! wrapped.call(1);
//! clock.advance_ms(50);
//! wrapped.call(2);
//! clock.advance_ms(200);
//! assert!(wrapped.poll());
//! drop(wrapped);
//! assert_eq!(seen, vec![2]);
//! ```

use crate::timing::driver::Scheduled;
use crate::timing::{deadline_after, Clock, SystemClock, TimerId, Timers};
use std::time::{Duration, Instant};

/// Debounce state without a bound callback.
///
/// Useful when the caller wants the debounced arguments back rather than
/// having a closure invoked, e.g. from an Elm-style `update` function.
#[derive(Debug)]
pub struct Debouncer<A, C = SystemClock> {
    wait: Duration,
    clock: C,
    timers: Timers<A>,
    pending: Option<TimerId>,
}

impl<A> Debouncer<A, SystemClock> {
    /// Creates a debouncer on the system clock.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self::with_clock(wait, SystemClock)
    }
}

impl<A, C: Clock> Debouncer<A, C> {
    /// Creates a debouncer on the given clock.
    #[must_use]
    pub fn with_clock(wait: Duration, clock: C) -> Self {
        Self {
            wait,
            clock,
            timers: Timers::new(),
            pending: None,
        }
    }

    /// Records a call, replacing any pending one.
    pub fn call(&mut self, args: A) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
        let deadline = deadline_after(self.clock.now(), self.wait);
        self.pending = Some(self.timers.schedule_at(deadline, args));
    }

    /// Returns the pending arguments once the quiet period has elapsed.
    ///
    /// Each recorded burst is returned at most once.
    pub fn poll(&mut self) -> Option<A> {
        let expired = self.timers.pop_next_due(self.clock.now())?;
        self.pending = None;
        Some(expired.event)
    }

    /// Returns the pending arguments immediately, without waiting.
    pub fn flush(&mut self) -> Option<A> {
        self.cancel()
    }

    /// Drops the pending call, returning its arguments.
    pub fn cancel(&mut self) -> Option<A> {
        let id = self.pending.take()?;
        self.timers.cancel(id)
    }

    /// Returns true while a call is waiting for its quiet period.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns when the pending call will fire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns the quiet period.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// A callback wrapped by [`debounce`].
pub struct Debounced<A, F, C = SystemClock> {
    state: Debouncer<A, C>,
    callback: F,
}

impl<A, F, C> Debounced<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    /// Schedules the callback with `args`, cancelling any pending invocation.
    pub fn call(&mut self, args: A) {
        self.state.call(args);
    }

    /// Invokes the callback if its quiet period has elapsed.
    ///
    /// Returns true if the callback ran.
    pub fn poll(&mut self) -> bool {
        match self.state.poll() {
            Some(args) => {
                (self.callback)(args);
                true
            }
            None => false,
        }
    }

    /// Invokes the pending callback right away.
    ///
    /// Returns true if there was one.
    pub fn flush(&mut self) -> bool {
        match self.state.flush() {
            Some(args) => {
                (self.callback)(args);
                true
            }
            None => false,
        }
    }

    /// Drops the pending invocation. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.state.cancel().is_some()
    }

    /// Returns true while an invocation is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }
}

impl<A, F, C> Scheduled for Debounced<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    fn next_deadline(&self) -> Option<Instant> {
        self.state.next_deadline()
    }

    fn tick(&mut self) {
        self.poll();
    }
}

/// Wraps `callback` so that bursts of calls collapse into one trailing call.
pub fn debounce<A, F>(callback: F, wait: Duration) -> Debounced<A, F>
where
    F: FnMut(A),
{
    debounce_with_clock(callback, wait, SystemClock)
}

/// Like [`debounce`], on an explicit clock.
pub fn debounce_with_clock<A, F, C>(callback: F, wait: Duration, clock: C) -> Debounced<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    Debounced {
        state: Debouncer::with_clock(wait, clock),
        callback,
    }
}
