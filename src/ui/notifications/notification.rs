// SPDX-License-Identifier: MPL-2.0
//! Toast requests and severity levels.

use crate::diagnostics::{ErrorType, WarningType};
use crate::domain::notifications::{toast_duration_defaults, ToastDuration};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Unique identifier of a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(super) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Severity level; determines icon, default title and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Lowercase name, also used as the toast's CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Parses a severity name. Unknown names fall back to [`Severity::Info`].
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Icon class name (Font Awesome).
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-times-circle",
            Severity::Warning => "fa-exclamation-triangle",
            Severity::Info => "fa-info-circle",
        }
    }

    /// Glyph used when the icon font is not available.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Severity::Success => '✔',
            Severity::Error => '✖',
            Severity::Warning => '⚠',
            Severity::Info => 'ℹ',
        }
    }

    /// Title shown when the request carries none.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// Display duration used by this severity's convenience entry point.
    #[must_use]
    pub fn default_duration(self) -> ToastDuration {
        let ms = match self {
            Severity::Success => toast_duration_defaults::SUCCESS_MS,
            Severity::Error => toast_duration_defaults::ERROR_MS,
            Severity::Warning => toast_duration_defaults::WARNING_MS,
            Severity::Info => toast_duration_defaults::INFO_MS,
        };
        ToastDuration::from_millis(ms)
    }

    /// Accent color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

/// A request to show a toast. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    message: String,
    severity: Severity,
    duration: ToastDuration,
    title: Option<String>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl ToastRequest {
    /// General-purpose request: info severity, 4000 ms.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            duration: ToastDuration::default(),
            title: None,
            warning_type: None,
            error_type: None,
        }
    }

    /// Request with an explicit severity and the general-purpose duration.
    pub fn with_severity(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            severity,
            ..Self::new(message)
        }
    }

    /// Success toast, 4000 ms.
    pub fn success(message: impl Into<String>) -> Self {
        Self::for_severity(message, Severity::Success)
    }

    /// Error toast, 5000 ms.
    pub fn error(message: impl Into<String>) -> Self {
        Self::for_severity(message, Severity::Error)
    }

    /// Warning toast, 4500 ms.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::for_severity(message, Severity::Warning)
    }

    /// Info toast, 3500 ms.
    pub fn info(message: impl Into<String>) -> Self {
        Self::for_severity(message, Severity::Info)
    }

    fn for_severity(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            severity,
            duration: severity.default_duration(),
            ..Self::new(message)
        }
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<ToastDuration>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Overrides the display duration in milliseconds.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(ToastDuration::from_millis(millis))
    }

    /// Sets the title. An empty title means "use the severity default".
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    /// Sets the title when `title` is `Some`.
    #[must_use]
    pub fn maybe_title(self, title: Option<impl Into<String>>) -> Self {
        match title {
            Some(title) => self.title(title),
            None => self,
        }
    }

    /// Sets the diagnostic category logged for a warning toast.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Sets the diagnostic category logged for an error toast.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn display_duration(&self) -> ToastDuration {
        self.duration
    }

    /// Explicit title, if any.
    #[must_use]
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title to display: the explicit one, or the severity default.
    #[must_use]
    pub fn resolved_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.severity.default_title())
    }
}
