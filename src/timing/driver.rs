// SPDX-License-Identifier: MPL-2.0
//! Async driver that sleeps until the next deadline and ticks.

use std::time::Instant;

/// Something with pending deadlines that advances when ticked.
pub trait Scheduled {
    /// Earliest instant at which [`Scheduled::tick`] has work to do.
    fn next_deadline(&self) -> Option<Instant>;

    /// Fires everything that is due.
    fn tick(&mut self);
}

/// Drives `target` with real time until it has nothing left to wait for.
pub async fn run_until_idle<S: Scheduled>(target: &mut S) {
    run_until_idle_with(target, |_| {}).await;
}

/// Like [`run_until_idle`], calling `after_tick` after every tick.
pub async fn run_until_idle_with<S, F>(target: &mut S, mut after_tick: F)
where
    S: Scheduled,
    F: FnMut(&S),
{
    while let Some(deadline) = target.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        target.tick();
        after_tick(target);
    }
}
