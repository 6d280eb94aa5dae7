// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: an in-memory activity log for the admin panel.
//!
//! Components log through a cheap, cloneable [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains the channel into a bounded
//! [`CircularBuffer`] and can export the retained events as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, RequestEvent, UserAction,
    WarningEvent, WarningType,
};
