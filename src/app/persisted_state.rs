// SPDX-License-Identifier: MPL-2.0
//! Client-side key/value state that survives between sessions.
//!
//! This is the admin panel's equivalent of browser local storage: the
//! chosen theme (key `"theme"`) and the last auto-saved form draft (key
//! `"draft"`). It is stored in CBOR, separately from the user-editable
//! `settings.toml`.
//!
//! Failures never abort the caller; they are reported as notification keys
//! that can be shown as warning toasts.

use super::paths;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Field values of a form, keyed by field name.
pub type FormDraft = BTreeMap<String, String>;

/// Persisted client-side state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Theme chosen with the toggle button. `None` until the user toggles once.
    #[serde(default)]
    pub theme: Option<ThemeMode>,

    /// Last auto-saved form draft.
    #[serde(default)]
    pub draft: Option<FormDraft>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns the default state and a warning key when the file exists but
    /// cannot be read or decoded.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default location when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves state to the default location.
    ///
    /// Returns a warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state into `base_dir`, or the default location when `None`.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Removes the saved draft, returning it.
    pub fn take_draft(&mut self) -> Option<FormDraft> {
        self.draft.take()
    }
}
