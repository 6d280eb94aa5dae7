// SPDX-License-Identifier: MPL-2.0
//! Required-field validation for the admin forms.
//!
//! Blank required fields get an error border that clears itself after two
//! seconds, and a single error toast tells the user what went wrong.

use crate::config::defaults::FIELD_ERROR_HIGHLIGHT_MS;
use crate::timing::driver::Scheduled;
use crate::timing::{deadline_after, Clock, SystemClock, TimerId, Timers};
use crate::ui::notifications::{Manager, Severity, ToastRequest};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Toast shown when a submission has blank required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// A form control as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl Field {
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }

    /// A required field is missing when its value is blank after trimming.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

/// Names of the required fields left blank, in form order.
#[must_use]
pub fn missing_fields(fields: &[Field]) -> Vec<&str> {
    fields
        .iter()
        .filter(|f| f.is_missing())
        .map(|f| f.name.as_str())
        .collect()
}

/// Validates submissions and tracks which fields show an error border.
#[derive(Debug)]
pub struct FormValidator<C = SystemClock> {
    clock: C,
    highlight: Duration,
    timers: Timers<String>,
    highlighted: HashMap<String, TimerId>,
}

impl Default for FormValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> FormValidator<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            highlight: Duration::from_millis(FIELD_ERROR_HIGHLIGHT_MS),
            timers: Timers::new(),
            highlighted: HashMap::new(),
        }
    }

    /// Checks a submission. Returns true when it may proceed.
    ///
    /// Every blank required field is highlighted for two seconds, restarting
    /// the period if it already was.
    pub fn validate<TC: Clock>(&mut self, fields: &[Field], toasts: &mut Manager<TC>) -> bool {
        let missing = missing_fields(fields);
        if missing.is_empty() {
            return true;
        }

        let until = deadline_after(self.clock.now(), self.highlight);
        for name in missing {
            if let Some(previous) = self.highlighted.remove(name) {
                self.timers.cancel(previous);
            }
            let timer = self.timers.schedule_at(until, name.to_string());
            self.highlighted.insert(name.to_string(), timer);
        }

        toasts.notify(ToastRequest::with_severity(
            REQUIRED_FIELDS_MESSAGE,
            Severity::Error,
        ));
        false
    }

    /// Clears highlights whose period has elapsed.
    pub fn tick(&mut self) {
        for expired in self.timers.pop_due(self.clock.now()) {
            self.highlighted.remove(&expired.event);
        }
    }

    #[must_use]
    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlighted.contains_key(name)
    }
}

impl<C: Clock> Scheduled for FormValidator<C> {
    fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn tick(&mut self) {
        FormValidator::tick(self);
    }
}
