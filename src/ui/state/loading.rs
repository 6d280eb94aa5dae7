// SPDX-License-Identifier: MPL-2.0
//! Busy states: buttons waiting on a request and the page-wide spinner.

/// Label shown on a button while its request is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// A button that can be switched into a disabled "Loading..." state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingButton {
    label: String,
    original: Option<String>,
}

impl LoadingButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original: None,
        }
    }

    /// Enters or leaves the loading state.
    ///
    /// Entering twice keeps the first saved label, so leaving always
    /// restores what the button said before any request started.
    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            if self.original.is_none() {
                self.original = Some(std::mem::replace(
                    &mut self.label,
                    LOADING_LABEL.to_string(),
                ));
            }
        } else if let Some(original) = self.original.take() {
            self.label = original;
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.original.is_some()
    }

    /// Buttons are disabled while loading.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.is_loading()
    }
}

/// Page-wide spinner overlay, created on first use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerOverlay {
    created: bool,
    active: bool,
}

impl SpinnerOverlay {
    pub fn show(&mut self) {
        self.created = true;
        self.active = true;
    }

    /// Hides the spinner. Hiding a spinner that was never shown is a no-op.
    pub fn hide(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_created(self) -> bool {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_replaces_and_restores_label() {
        let mut button = LoadingButton::new("Delete");
        button.set_loading(true);
        assert_eq!(button.label(), LOADING_LABEL);
        assert!(button.is_disabled());

        button.set_loading(false);
        assert_eq!(button.label(), "Delete");
        assert!(!button.is_disabled());
    }

    #[test]
    fn double_entry_keeps_original_label() {
        let mut button = LoadingButton::new("Save");
        button.set_loading(true);
        button.set_loading(true);
        button.set_loading(false);
        assert_eq!(button.label(), "Save");
    }

    #[test]
    fn leaving_without_entering_is_noop() {
        let mut button = LoadingButton::new("Save");
        button.set_loading(false);
        assert_eq!(button.label(), "Save");
    }

    #[test]
    fn spinner_is_created_lazily() {
        let mut spinner = SpinnerOverlay::default();
        spinner.hide();
        assert!(!spinner.is_created());

        spinner.show();
        assert!(spinner.is_active());
        spinner.hide();
        assert!(spinner.is_created());
        assert!(!spinner.is_active());
    }
}
