// SPDX-License-Identifier: MPL-2.0
//! Global search box and the books table filter.

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::timing::driver::Scheduled;
use crate::timing::{Clock, SystemClock};
use std::time::Instant;

/// Path of the full search results page.
pub const SEARCH_PATH: &str = "/search";

/// The header search box.
///
/// Typing schedules a live search once the input has been quiet for the
/// configured delay; queries shorter than the minimum length are ignored.
/// Enter navigates to the results page instead.
#[derive(Debug)]
pub struct GlobalSearch<C = SystemClock> {
    debouncer: Debouncer<String, C>,
    min_query_len: usize,
}

impl GlobalSearch<SystemClock> {
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> GlobalSearch<C> {
    #[must_use]
    pub fn with_clock(config: &SearchConfig, clock: C) -> Self {
        Self {
            debouncer: Debouncer::with_clock(config.delay(), clock),
            min_query_len: config.min_query_len,
        }
    }

    /// Handles an input event with the field's current value.
    ///
    /// Any pending search is dropped, even when the new value is too short.
    pub fn input(&mut self, value: &str) {
        self.debouncer.cancel();
        if let Some(query) = self.accept(value) {
            self.debouncer.call(query.to_string());
        }
    }

    /// Returns the query to search for once the input has settled.
    pub fn poll(&mut self) -> Option<String> {
        self.debouncer.poll()
    }

    /// Handles Enter. Returns the results page URL for a long enough query.
    pub fn submit(&mut self, value: &str) -> Option<String> {
        let query = self.accept(value)?;
        Some(search_url(query))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn accept<'a>(&self, value: &'a str) -> Option<&'a str> {
        let query = value.trim();
        (query.chars().count() >= self.min_query_len).then_some(query)
    }
}

impl<C: Clock> Scheduled for GlobalSearch<C> {
    fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }

    fn tick(&mut self) {
        self.poll();
    }
}

/// Results page URL for `query`, percent-encoded.
#[must_use]
pub fn search_url(query: &str) -> String {
    format!("{SEARCH_PATH}?q={}", urlencoding::encode(query))
}

/// Whether a table row stays visible for the filter `term`.
///
/// Matching is a case-insensitive substring test on the row's text.
#[must_use]
pub fn row_matches(row_text: &str, term: &str) -> bool {
    row_text.to_lowercase().contains(&term.to_lowercase())
}

/// Visibility of each row for the filter `term`.
pub fn filter_rows<'a, I>(rows: I, term: &str) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let term = term.to_lowercase();
    rows.into_iter()
        .map(|row| row.to_lowercase().contains(&term))
        .collect()
}
