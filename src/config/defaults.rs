// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the admin panel. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast concurrency and animation timings
//! - **Drafts**: Auto-save debounce delay
//! - **Search**: Global search debounce and minimum query length
//! - **Chrome**: Layout breakpoints and transition windows
//! - **API**: Backend base URL and reload delay

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts rendered at the same time.
pub const MAX_CONCURRENT_TOASTS: usize = 3;

/// Delay between appending a toast and starting its entry transition (ms).
pub const TOAST_SHOW_DELAY_MS: u64 = 10;

/// Default length of the toast exit animation (ms).
pub const DEFAULT_TOAST_EXIT_ANIMATION_MS: u64 = 400;

/// Minimum exit animation length (ms).
pub const MIN_TOAST_EXIT_ANIMATION_MS: u64 = 0;

/// Maximum exit animation length (ms).
pub const MAX_TOAST_EXIT_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Draft Defaults
// ==========================================================================

/// Default quiet period before a form draft is saved (ms).
pub const DEFAULT_DRAFT_AUTOSAVE_MS: u64 = 2000;

/// Minimum draft auto-save delay (ms).
pub const MIN_DRAFT_AUTOSAVE_MS: u64 = 100;

/// Maximum draft auto-save delay (ms).
pub const MAX_DRAFT_AUTOSAVE_MS: u64 = 60_000;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default quiet period before a live search runs (ms).
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 500;

/// Default minimum number of characters before searching.
pub const DEFAULT_SEARCH_MIN_QUERY_LEN: usize = 2;

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Viewport width at or below which the sidebar behaves as an overlay (px).
pub const SIDEBAR_OVERLAY_BREAKPOINT_PX: u32 = 1024;

/// Duration of the theme switch colour transition (ms).
pub const THEME_TRANSITION_MS: u64 = 300;

/// How long an invalid required field stays highlighted (ms).
pub const FIELD_ERROR_HIGHLIGHT_MS: u64 = 2000;

/// Delay between successive card fade-ins on page load (ms).
pub const CARD_FADE_STAGGER_MS: u64 = 50;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Delay before the page reloads after a successful mutation (ms).
pub const RELOAD_DELAY_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_CONCURRENT_TOASTS > 0);
    assert!(DEFAULT_TOAST_EXIT_ANIMATION_MS >= MIN_TOAST_EXIT_ANIMATION_MS);
    assert!(DEFAULT_TOAST_EXIT_ANIMATION_MS <= MAX_TOAST_EXIT_ANIMATION_MS);

    assert!(MIN_DRAFT_AUTOSAVE_MS > 0);
    assert!(DEFAULT_DRAFT_AUTOSAVE_MS >= MIN_DRAFT_AUTOSAVE_MS);
    assert!(DEFAULT_DRAFT_AUTOSAVE_MS <= MAX_DRAFT_AUTOSAVE_MS);

    assert!(DEFAULT_SEARCH_DELAY_MS > 0);
    assert!(DEFAULT_SEARCH_MIN_QUERY_LEN > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_match_admin_panel() {
        assert_eq!(MAX_CONCURRENT_TOASTS, 3);
        assert_eq!(DEFAULT_TOAST_EXIT_ANIMATION_MS, 400);
        assert_eq!(TOAST_SHOW_DELAY_MS, 10);
    }

    #[test]
    fn draft_defaults_are_valid() {
        assert_eq!(DEFAULT_DRAFT_AUTOSAVE_MS, 2000);
        assert!(DEFAULT_DRAFT_AUTOSAVE_MS >= MIN_DRAFT_AUTOSAVE_MS);
        assert!(DEFAULT_DRAFT_AUTOSAVE_MS <= MAX_DRAFT_AUTOSAVE_MS);
    }

    #[test]
    fn search_defaults_are_valid() {
        assert_eq!(DEFAULT_SEARCH_DELAY_MS, 500);
        assert_eq!(DEFAULT_SEARCH_MIN_QUERY_LEN, 2);
    }

    #[test]
    fn api_base_url_ends_with_slash() {
        assert!(DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
