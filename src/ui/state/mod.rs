// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State of the panel chrome, kept apart from the notification system and
//! the admin actions.

pub mod drag;
pub mod dropdown;
pub mod loading;
pub mod sidebar;
pub mod tabs;

// Re-export commonly used types for convenience
pub use drag::{DragEvent, DragState};
pub use dropdown::{DropdownKind, DropdownState, HeaderMenus};
pub use loading::{LoadingButton, SpinnerOverlay, LOADING_LABEL};
pub use sidebar::SidebarState;
pub use tabs::TabsState;
