// SPDX-License-Identifier: MPL-2.0
//! Deferred work on an injectable clock.
//!
//! Everything that "waits" in the admin panel (toast expiry, exit
//! animations, debounced callbacks) is expressed as a [`Timers`] entry
//! rather than a sleeping task. Callers own the loop: they ask for the
//! next deadline, wait until then by whatever means they have, and pop the
//! due entries. Tests use [`ManualClock`] and never sleep.

mod clock;
pub mod driver;
mod timers;

pub use clock::{deadline_after, Clock, ManualClock, SystemClock};
pub use timers::{Expired, TimerId, Timers};
