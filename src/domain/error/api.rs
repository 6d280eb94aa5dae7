// SPDX-License-Identifier: MPL-2.0
//! Errors reported by the admin backend API.

use std::fmt;

/// Failure of a call to the admin backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The server answered but refused the operation, optionally with a reason.
    Rejected(Option<String>),

    /// The request never produced a response (connection refused, timeout...).
    Transport(String),

    /// The response body was not the expected JSON.
    Decode(String),

    /// The configured base URL cannot be joined with an endpoint path.
    InvalidUrl(String),
}

impl ApiError {
    /// Returns the notification key used to describe this error to the user.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::Status(_) => "error-api-status",
            ApiError::Rejected(_) => "error-api-rejected",
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidUrl(_) => "error-api-url",
        }
    }

    /// Returns the reason supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Some(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "Server returned status {code}"),
            ApiError::Rejected(Some(message)) => write!(f, "Rejected: {message}"),
            ApiError::Rejected(None) => write!(f, "Rejected by server"),
            ApiError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ApiError::Decode(msg) => write!(f, "Invalid response: {msg}"),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
        }
    }
}
