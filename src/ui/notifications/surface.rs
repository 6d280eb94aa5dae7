// SPDX-License-Identifier: MPL-2.0
//! The display surface toasts are rendered on.
//!
//! The surface is an append-only container: new toasts go to the end, and
//! toasts leave it only by removal. Its element count is the number of
//! active toasts.

use super::notification::{Severity, ToastId, ToastRequest};

/// Animation phase of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appended, entry transition not started yet.
    Entering,
    /// Fully visible.
    Shown,
    /// Exit animation running; removal follows.
    Leaving,
}

/// A toast currently on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    id: ToastId,
    severity: Severity,
    title: String,
    message: String,
    phase: Phase,
}

impl ToastElement {
    pub(super) fn new(id: ToastId, request: &ToastRequest) -> Self {
        Self {
            id,
            severity: request.severity(),
            title: request.resolved_title().to_string(),
            message: request.message().to_string(),
            phase: Phase::Entering,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// CSS classes the element carries: `toast <severity>` plus `show` while shown.
    #[must_use]
    pub fn class_name(&self) -> String {
        match self.phase {
            Phase::Shown => format!("toast {} show", self.severity.as_str()),
            Phase::Entering | Phase::Leaving => format!("toast {}", self.severity.as_str()),
        }
    }
}

/// Container holding the rendered toasts, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    elements: Vec<ToastElement>,
}

impl Surface {
    /// Class name of the container element.
    pub const CLASS_NAME: &'static str = "toast-container";

    pub(super) fn append(&mut self, element: ToastElement) {
        self.elements.push(element);
    }

    /// Removes an element. Removing an absent element is a no-op returning `None`.
    pub(super) fn remove(&mut self, id: ToastId) -> Option<ToastElement> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(pos))
    }

    /// Moves an element to `phase`, returning false if the element is gone.
    pub(super) fn set_phase(&mut self, id: ToastId, phase: Phase) -> bool {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                element.phase = phase;
                true
            }
            None => false,
        }
    }

    pub(super) fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Elements in append order (oldest first).
    pub fn elements(&self) -> impl Iterator<Item = &ToastElement> {
        self.elements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
