// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`ToastDuration`]: How long a toast stays on screen before it starts leaving

mod newtypes;

pub use newtypes::{toast_duration_defaults, ToastDuration};
