// SPDX-License-Identifier: MPL-2.0
//! Drop-zone highlight state
//!
//! Tracks whether files are being dragged over the upload area.

/// Drag events delivered to the upload area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Manages the drop-zone highlight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Whether the drop zone is currently highlighted
    pub is_highlighted: bool,
}

impl DragState {
    /// Updates the highlight for a drag event
    pub fn handle(&mut self, event: DragEvent) {
        self.is_highlighted = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    /// Border style of the drop zone (dashed brand color while highlighted)
    #[must_use]
    pub fn border_style(self) -> Option<&'static str> {
        self.is_highlighted.then_some("2px dashed var(--primary)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_highlighted() {
        let state = DragState::default();
        assert!(!state.is_highlighted);
        assert!(state.border_style().is_none());
    }

    #[test]
    fn enter_and_over_highlight() {
        let mut state = DragState::default();
        state.handle(DragEvent::Enter);
        assert!(state.is_highlighted);
        state.handle(DragEvent::Over);
        assert!(state.is_highlighted);
    }

    #[test]
    fn leave_and_drop_clear_highlight() {
        let mut state = DragState::default();
        state.handle(DragEvent::Over);
        state.handle(DragEvent::Leave);
        assert!(!state.is_highlighted);

        state.handle(DragEvent::Enter);
        state.handle(DragEvent::Drop);
        assert!(!state.is_highlighted);
    }
}
