// SPDX-License-Identifier: MPL-2.0
//! Staggered fade-in of dashboard cards on page load.
//!
//! Cards start hidden and shifted down; card `i` begins its transition
//! `i * 50 ms` after the page loads.

use crate::config::defaults::CARD_FADE_STAGGER_MS;
use crate::timing::driver::Scheduled;
use crate::timing::{Clock, SystemClock, Timers};
use std::time::{Duration, Instant};

/// Vertical offset of a card before its transition, in pixels.
pub const HIDDEN_OFFSET_PX: f32 = 20.0;

/// Delay before card `index` starts fading in.
#[must_use]
pub fn stagger_delay(index: usize) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    Duration::from_millis(CARD_FADE_STAGGER_MS).saturating_mul(index)
}

/// Fade-in progress of the cards of one page.
#[derive(Debug)]
pub struct PageAnimations<C = SystemClock> {
    clock: C,
    revealed: Vec<bool>,
    timers: Timers<usize>,
}

impl PageAnimations<SystemClock> {
    /// Schedules the fade-in of `card_count` cards from now.
    #[must_use]
    pub fn start(card_count: usize) -> Self {
        Self::start_with_clock(card_count, SystemClock)
    }
}

impl<C: Clock> PageAnimations<C> {
    #[must_use]
    pub fn start_with_clock(card_count: usize, clock: C) -> Self {
        let now = clock.now();
        let mut timers = Timers::new();
        for index in 0..card_count {
            timers.schedule_at(now + stagger_delay(index), index);
        }
        Self {
            clock,
            revealed: vec![false; card_count],
            timers,
        }
    }

    /// Starts every transition that is due. Returns the cards that started.
    pub fn tick(&mut self) -> Vec<usize> {
        let due = self.timers.pop_due(self.clock.now());
        due.into_iter()
            .map(|expired| {
                self.revealed[expired.event] = true;
                expired.event
            })
            .collect()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Opacity target of card `index`: 0 until its transition starts, then 1.
    #[must_use]
    pub fn opacity(&self, index: usize) -> f32 {
        if self.is_revealed(index) {
            1.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<C: Clock> Scheduled for PageAnimations<C> {
    fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn tick(&mut self) {
        PageAnimations::tick(self);
    }
}
