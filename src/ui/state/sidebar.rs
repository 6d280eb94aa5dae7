// SPDX-License-Identifier: MPL-2.0
//! Sidebar open/closed state.

use crate::config::defaults::SIDEBAR_OVERLAY_BREAKPOINT_PX;

/// Whether the navigation sidebar is expanded.
///
/// On narrow viewports the sidebar overlays the page, so a click anywhere
/// else closes it. On wide viewports it stays put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl SidebarState {
    /// Handles a click on the sidebar toggle button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Handles a click outside both the sidebar and its toggle button.
    pub fn click_outside(&mut self, viewport_width: u32) {
        if Self::overlays(viewport_width) {
            self.is_open = false;
        }
    }

    /// True when the sidebar overlays the content at this width.
    #[must_use]
    pub fn overlays(viewport_width: u32) -> bool {
        viewport_width <= SIDEBAR_OVERLAY_BREAKPOINT_PX
    }

    /// Class the page body carries while the sidebar is open.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        self.is_open.then_some("sidebar-open")
    }
}
