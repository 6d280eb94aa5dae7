// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the library backend's admin endpoints.

use super::csrf::{CsrfToken, HEADER as CSRF_HEADER};
use crate::diagnostics::{DiagnosticsHandle, RequestEvent};
use crate::error::ApiError;
use chrono::NaiveDate;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, Url};
use serde::Deserialize;
use std::time::Instant;

/// A book as returned by `GET /api/books/{id}/`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub available: i64,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Decimal price, serialized by the backend as a string.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
}

/// Body of `POST /api/users/{id}/toggle-status/`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ToggleStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /notifications/mark-all-read/`.
///
/// Older endpoints answer `{"success": true}`, newer ones
/// `{"status": "success"}`; both are accepted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct MarkAllReadResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl MarkAllReadResponse {
    fn accepted(&self) -> bool {
        self.success == Some(true) || self.status.as_deref() == Some("success")
    }
}

/// Client for the admin endpoints. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
    csrf: CsrfToken,
    diagnostics: Option<DiagnosticsHandle>,
}

impl AdminClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: &str, csrf: CsrfToken) -> Result<Self, ApiError> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            csrf,
            diagnostics: None,
        })
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches a book.
    pub async fn fetch_book(&self, id: u64) -> Result<Book, ApiError> {
        let response = self.send(Method::GET, &format!("api/books/{id}/")).await?;
        check_status(&response)?;
        Ok(response.json::<Book>().await?)
    }

    /// Deletes a book. Any non-success status is an error.
    pub async fn delete_book(&self, id: u64) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, &format!("api/books/{id}/")).await?;
        check_status(&response)
    }

    /// Deletes a category. Any non-success status is an error.
    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .send(Method::DELETE, &format!("api/categories/{id}/"))
            .await?;
        check_status(&response)
    }

    /// Activates or deactivates a user account.
    ///
    /// The outcome is read from the JSON body whatever the status code; a
    /// body with `success: false` is a rejection carrying the server's reason.
    pub async fn toggle_user_status(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .send(Method::POST, &format!("api/users/{id}/toggle-status/"))
            .await?;
        let body = response.json::<ToggleStatusResponse>().await?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(body.message))
        }
    }

    /// Marks every notification of the current user as read.
    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        let response = self
            .send(Method::POST, "notifications/mark-all-read/")
            .await?;
        let body = response.json::<MarkAllReadResponse>().await?;
        if body.accepted() {
            Ok(())
        } else {
            Err(ApiError::Rejected(body.message))
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        let url = self.url(path)?;
        let mut request = self.http.request(method.clone(), url.clone());
        if method != Method::GET {
            request = request
                .header(CSRF_HEADER, self.csrf.as_str())
                .header(CONTENT_TYPE, "application/json");
        }

        let started = Instant::now();
        let result = request.send().await;

        if let Some(handle) = &self.diagnostics {
            handle.log_request(RequestEvent {
                method: method.to_string(),
                path: url.path().to_string(),
                status: result.as_ref().ok().map(|r| r.status().as_u16()),
                duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            });
        }

        Ok(result?)
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = AdminClient::new("http://localhost:8000/library", CsrfToken::default())
            .expect("valid url");
        assert_eq!(
            client.url("/api/books/3/").expect("join").as_str(),
            "http://localhost:8000/library/api/books/3/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            AdminClient::new("not a url", CsrfToken::default()),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn mark_all_read_accepts_both_body_shapes() {
        let legacy: MarkAllReadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let current: MarkAllReadResponse =
            serde_json::from_str(r#"{"status": "success", "message": "done"}"#).unwrap();
        let failed: MarkAllReadResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Invalid request method"}"#)
                .unwrap();

        assert!(legacy.accepted());
        assert!(current.accepted());
        assert!(!failed.accepted());
    }

    #[test]
    fn book_parses_backend_payload() {
        let book: Book = serde_json::from_str(
            r#"{"id": 7, "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593",
                "category": 2, "category_name": "Science Fiction", "quantity": 3, "available": 1,
                "cover_image": null, "description": "", "price": "9.99",
                "publication_date": "1965-08-01", "created_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.category_name.as_deref(), Some("Science Fiction"));
        assert_eq!(book.publication_date, NaiveDate::from_ymd_opt(1965, 8, 1));
    }
}
