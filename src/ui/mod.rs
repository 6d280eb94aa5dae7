// SPDX-License-Identifier: MPL-2.0
//! User interface state and components.
//!
//! State is kept in plain structs updated by the host's event loop, in the
//! Elm-style "state down, messages up" pattern.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`state`] - Chrome state (sidebar, dropdowns, tabs, drop zone, loading)
//! - [`theming`] - Light/Dark/System theme mode and the persisted toggle
//! - [`animations`] - Staggered card fade-in
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod animations;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod theming;
