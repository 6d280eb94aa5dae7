// SPDX-License-Identifier: MPL-2.0
//! Toast timing newtypes.

use std::time::Duration;

/// Display durations used by the per-severity entry points (milliseconds).
pub mod toast_duration_defaults {
    /// General-purpose entry point.
    pub const GENERAL_MS: u64 = 4000;
    /// `success` convenience entry point.
    pub const SUCCESS_MS: u64 = 4000;
    /// `error` convenience entry point.
    pub const ERROR_MS: u64 = 5000;
    /// `warning` convenience entry point.
    pub const WARNING_MS: u64 = 4500;
    /// `info` convenience entry point.
    pub const INFO_MS: u64 = 3500;
    /// Shortest accepted duration.
    pub const MIN_MS: u64 = 1;
}

/// Time a toast spends on screen before its exit animation starts.
///
/// Always strictly positive: a zero duration is raised to one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// Creates a duration from a [`Duration`], raising zero to the minimum.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.max(Duration::from_millis(toast_duration_defaults::MIN_MS)))
    }

    /// Creates a duration from milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the wrapped duration.
    #[must_use]
    pub fn get(self) -> Duration {
        self.0
    }

    /// Returns the duration in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self::from_millis(toast_duration_defaults::GENERAL_MS)
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_raised_to_minimum() {
        assert_eq!(ToastDuration::from_millis(0).as_millis(), 1);
    }

    #[test]
    fn default_matches_general_entry_point() {
        assert_eq!(
            ToastDuration::default().as_millis(),
            toast_duration_defaults::GENERAL_MS
        );
    }

    #[test]
    fn severity_defaults_are_ordered() {
        use toast_duration_defaults::*;
        assert!(INFO_MS < SUCCESS_MS);
        assert!(SUCCESS_MS < WARNING_MS);
        assert!(WARNING_MS < ERROR_MS);
    }
}
