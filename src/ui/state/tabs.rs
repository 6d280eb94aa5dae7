// SPDX-License-Identifier: MPL-2.0
//! Tab bar of the admin panel.

/// A tab bar where exactly one tab is active once the user picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    names: Vec<String>,
    active: Option<usize>,
}

impl TabsState {
    /// Creates a tab bar. No tab is active until one is selected.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Activates the tab `name`, deactivating every other one.
    ///
    /// Returns the id of the content panel to show, or `None` for an
    /// unknown tab, in which case nothing changes.
    pub fn select(&mut self, name: &str) -> Option<String> {
        let index = self.names.iter().position(|n| n == name)?;
        self.active = Some(index);
        Some(Self::content_id(name))
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.names[i].as_str())
    }

    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }

    /// Id of the content panel belonging to tab `name`.
    #[must_use]
    pub fn content_id(name: &str) -> String {
        format!("{name}-tab")
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
