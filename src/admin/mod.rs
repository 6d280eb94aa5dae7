// SPDX-License-Identifier: MPL-2.0
//! Admin operations against the library backend.
//!
//! [`AdminClient`] speaks to the JSON endpoints; [`AdminActions`] adds the
//! confirmation prompts and toast feedback the admin tables show.

pub mod actions;
pub mod client;
pub mod csrf;

pub use actions::{ActionOutcome, AdminActions, AlwaysConfirm, Confirm, ReloadRequest};
pub use client::{AdminClient, Book};
pub use csrf::CsrfToken;
