// SPDX-License-Identifier: MPL-2.0
//! CSRF token discovery.
//!
//! The backend expects the token in the `X-CSRFToken` header of every
//! mutating request. Pages embed it in a hidden `csrfmiddlewaretoken` form
//! field; it is also available in the `csrftoken` cookie.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Name of the hidden form field carrying the token.
pub const FORM_FIELD: &str = "csrfmiddlewaretoken";
/// Name of the cookie carrying the token.
pub const COOKIE_NAME: &str = "csrftoken";
/// Request header the token is sent in.
pub const HEADER: &str = "X-CSRFToken";

/// A CSRF token. An empty token is sent as an empty header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Reads the token from the page's hidden form field.
    ///
    /// Returns `None` when the page has no such field or cannot be parsed.
    #[must_use]
    pub fn from_form_html(html: &str) -> Option<Self> {
        let mut reader = Reader::from_str(html);
        reader.config_mut().check_end_names = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let name = e
                        .try_get_attribute("name")
                        .ok()
                        .flatten()
                        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()));
                    if name.as_deref() == Some(FORM_FIELD) {
                        let value = e
                            .try_get_attribute("value")
                            .ok()
                            .flatten()
                            .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
                            .unwrap_or_default();
                        return Some(Self(value));
                    }
                }
                Ok(Event::Eof) | Err(_) => return None,
                _ => {}
            }
        }
    }

    /// Reads the token from a `Cookie` header value (`a=1; csrftoken=...`).
    ///
    /// The value is percent-decoded; an undecodable value is used as is.
    #[must_use]
    pub fn from_cookie_header(cookies: &str) -> Option<Self> {
        let prefix = format!("{COOKIE_NAME}=");
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|cookie| cookie.strip_prefix(&prefix))
            .map(|raw| {
                let value = urlencoding::decode(raw)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| raw.to_string());
                Self(value)
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
