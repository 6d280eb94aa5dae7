// SPDX-License-Identifier: MPL-2.0
//! Header dropdown menus (profile, notifications).

/// Which header dropdown a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKind {
    Profile,
    Notifications,
}

/// Open/closed state of a dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownState {
    kind: DropdownKind,
    is_open: bool,
}

impl DropdownState {
    #[must_use]
    pub fn new(kind: DropdownKind) -> Self {
        Self {
            kind,
            is_open: false,
        }
    }

    #[must_use]
    pub fn kind(self) -> DropdownKind {
        self.kind
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Handles a click on the dropdown's button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Handles a click outside both the menu and its button.
    pub fn click_outside(&mut self) {
        self.is_open = false;
    }

    /// Class the menu carries while open.
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        self.is_open.then_some("active")
    }
}

/// The two header dropdowns. A click on one button does not close the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMenus {
    pub profile: DropdownState,
    pub notifications: DropdownState,
}

impl Default for HeaderMenus {
    fn default() -> Self {
        Self {
            profile: DropdownState::new(DropdownKind::Profile),
            notifications: DropdownState::new(DropdownKind::Notifications),
        }
    }
}

impl HeaderMenus {
    /// Handles a click on the button of `kind`.
    pub fn toggle(&mut self, kind: DropdownKind) {
        self.get_mut(kind).toggle();
    }

    /// Handles a click on the page. `inside` names the dropdown the click
    /// landed in (menu or button), if any; every other dropdown closes.
    pub fn click(&mut self, inside: Option<DropdownKind>) {
        for menu in [&mut self.profile, &mut self.notifications] {
            if Some(menu.kind()) != inside {
                menu.click_outside();
            }
        }
    }

    fn get_mut(&mut self, kind: DropdownKind) -> &mut DropdownState {
        match kind {
            DropdownKind::Profile => &mut self.profile,
            DropdownKind::Notifications => &mut self.notifications,
        }
    }
}
