// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Chrome
    // ==========================================================================
    /// Switch between light and dark theme.
    ToggleTheme {
        /// Theme after the switch (`light` or `dark`).
        theme: String,
    },

    /// Open or close the sidebar.
    ToggleSidebar,

    /// Dismiss a toast with its close button.
    DismissToast,

    // ==========================================================================
    // Admin Operations
    // ==========================================================================
    DeleteBook {
        id: u64,
    },

    DeleteCategory {
        id: u64,
    },

    ToggleUserStatus {
        id: u64,
    },

    MarkAllRead,

    /// A destructive action was declined at the confirmation prompt.
    CancelAction,

    // ==========================================================================
    // Data
    // ==========================================================================
    /// Export the books table to CSV.
    ExportBooks {
        /// Number of exported rows, header included.
        rows: usize,
    },

    /// Drop files onto the upload zone.
    DropFiles {
        count: usize,
    },

    /// Auto-save a form draft.
    SaveDraft,
}

/// Category of a warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// `settings.toml` could not be loaded.
    Config,
    /// The persisted key/value store could not be read or written.
    State,
    /// A form failed required-field validation.
    Validation,
    #[default]
    Other,
}

/// Category of an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A backend call failed.
    Api,
    /// A CSV export failed.
    Export,
    /// A file could not be read or written.
    Io,
    #[default]
    Other,
}

/// A non-critical issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An operation that failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A completed (or failed) call to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestEvent {
    pub method: String,
    pub path: String,
    /// HTTP status, absent when no response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub duration_ms: u64,
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// A toast was requested.
    Toast {
        severity: String,
        /// Whether it had to wait in the overflow queue.
        queued: bool,
    },

    Request {
        event: RequestEvent,
    },

    Warning {
        event: WarningEvent,
    },

    Error {
        event: ErrorEvent,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
