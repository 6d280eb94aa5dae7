// SPDX-License-Identifier: MPL-2.0
//! `library_admin` is the interaction layer of a library-management admin
//! panel, usable headless or from the `library-admin` binary.
//!
//! The centrepiece is the toast [`ui::notifications::Manager`]: at most three
//! toasts on screen, a FIFO queue for the rest, and timer-driven entry and
//! exit. Around it sit the [`debounce`] utility, CSV export, uploads, form
//! validation, theme switching and the admin API actions.

#![doc(html_root_url = "https://docs.rs/library_admin/0.1.0")]

pub mod admin;
pub mod app;
pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod domain;
pub mod drafts;
pub mod error;
pub mod export;
pub mod forms;
pub mod search;
pub mod timing;
pub mod ui;
pub mod upload;
