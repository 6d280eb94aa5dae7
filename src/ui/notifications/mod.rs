// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for admin feedback.
//!
//! At most three toasts are on screen at once; further requests wait in a
//! FIFO queue and are shown as slots free up.
//!
//! # Components
//!
//! - [`notification`] - `ToastRequest`, `Severity` and `ToastId`
//! - [`surface`] - the container the toasts are rendered on
//! - [`manager`] - `Manager`, the queue and timed lifecycle
//! - `toast` - iced widget rendering the surface
//!
//! # Usage
//!
//! ```
//! use library_admin::timing::ManualClock;
//! use library_admin::ui::notifications::{Manager, ToastRequest};
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(clock.clone());
//! manager.notify(ToastRequest::success("Book deleted successfully"));
//!
//! clock.advance_ms(4_400);
//! manager.tick();
//! assert_eq!(manager.active_count(), 0);
//! ```

pub mod manager;
pub mod notification;
pub mod surface;
mod toast;

pub use manager::{Admission, Manager, Message as NotificationMessage};
pub use notification::{Severity, ToastId, ToastRequest};
pub use surface::{Phase, Surface, ToastElement};
pub use toast::Toast;
