// SPDX-License-Identifier: MPL-2.0
//! Debounced auto-save of the form being edited.
//!
//! Every edit reschedules the save; the draft is written to the persisted
//! store under the `"draft"` key once editing has paused.

use crate::app::persisted_state::{AppState, FormDraft};
use crate::config::DraftsConfig;
use crate::debounce::Debouncer;
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningEvent, WarningType};
use crate::timing::driver::Scheduled;
use crate::timing::{Clock, SystemClock};
use std::path::PathBuf;
use std::time::Instant;

/// Saves form drafts after a quiet period.
#[derive(Debug)]
pub struct DraftAutosaver<C = SystemClock> {
    debouncer: Debouncer<FormDraft, C>,
    state_dir: Option<PathBuf>,
    diagnostics: Option<DiagnosticsHandle>,
    last_warning: Option<String>,
}

impl DraftAutosaver<SystemClock> {
    #[must_use]
    pub fn new(config: &DraftsConfig, state_dir: Option<PathBuf>) -> Self {
        Self::with_clock(config, state_dir, SystemClock)
    }
}

impl<C: Clock> DraftAutosaver<C> {
    #[must_use]
    pub fn with_clock(config: &DraftsConfig, state_dir: Option<PathBuf>, clock: C) -> Self {
        Self {
            debouncer: Debouncer::with_clock(config.autosave_delay(), clock),
            state_dir,
            diagnostics: None,
            last_warning: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Records the current form contents, replacing any unsaved draft.
    pub fn update(&mut self, draft: FormDraft) {
        self.debouncer.call(draft);
    }

    /// Writes the draft if editing has paused long enough.
    ///
    /// Returns true if a draft was written (or its write attempted).
    pub fn poll(&mut self) -> bool {
        match self.debouncer.poll() {
            Some(draft) => {
                self.save(draft);
                true
            }
            None => false,
        }
    }

    /// Writes the pending draft now, e.g. before the page is left.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(draft) => {
                self.save(draft);
                true
            }
            None => false,
        }
    }

    /// Drops the pending draft without writing it, e.g. after a successful submit.
    pub fn discard(&mut self) {
        self.debouncer.cancel();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Warning key of the last failed write, if any.
    #[must_use]
    pub fn last_warning(&self) -> Option<&str> {
        self.last_warning.as_deref()
    }

    /// Writes `draft` into the persisted store.
    ///
    /// An unreadable store is left alone so the other preferences it holds
    /// are not replaced by defaults.
    fn save(&mut self, draft: FormDraft) {
        let (mut state, load_warning) = AppState::load_from(self.state_dir.clone());
        self.last_warning = match load_warning {
            Some(key) => Some(key),
            None => {
                state.draft = Some(draft);
                state.save_to(self.state_dir.clone())
            }
        };

        if let Some(handle) = &self.diagnostics {
            match &self.last_warning {
                Some(key) => handle.log_warning(WarningEvent::new(WarningType::State, key)),
                None => handle.log_action(UserAction::SaveDraft),
            }
        }
    }
}

impl<C: Clock> Scheduled for DraftAutosaver<C> {
    fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }

    fn tick(&mut self) {
        self.poll();
    }
}

/// Loads the saved draft, if any.
#[must_use]
pub fn restore(state_dir: Option<PathBuf>) -> Option<FormDraft> {
    AppState::load_from(state_dir).0.draft
}
