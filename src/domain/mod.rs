// SPDX-License-Identifier: MPL-2.0
//! Value objects and domain errors shared by the admin panel.
//!
//! Nothing here depends on iced, reqwest or the file system, so these types
//! can be built and checked in isolation.
//!
//! - [`diagnostics`]: [`BufferCapacity`](diagnostics::BufferCapacity) for the event log
//! - [`error`]: [`ApiError`](error::ApiError), failures of backend calls
//! - [`notifications`]: [`ToastDuration`](notifications::ToastDuration)

pub mod diagnostics;
pub mod error;
pub mod notifications;
