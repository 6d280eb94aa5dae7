// SPDX-License-Identifier: MPL-2.0
//! Admin actions against a local stub of the library backend.

use library_admin::admin::actions::{
    BOOK_DELETED, BOOK_DELETE_FAILED, BOOK_FETCH_FAILED, CATEGORY_DELETED, EDIT_COMING_SOON,
    USER_STATUS_REJECTED, USER_STATUS_UPDATED,
};
use library_admin::admin::{
    ActionOutcome, AdminActions, AdminClient, AlwaysConfirm, CsrfToken, ReloadRequest,
};
use library_admin::error::ApiError;
use library_admin::timing::ManualClock;
use library_admin::ui::notifications::{Manager, Severity};
use library_admin::ui::state::LoadingButton;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned answer for `"<METHOD> <path>"`.
struct Route {
    request: &'static str,
    status: u16,
    body: &'static str,
}

const fn route(request: &'static str, status: u16, body: &'static str) -> Route {
    Route {
        request,
        status,
        body,
    }
}

/// Serves `routes` until the test ends. Returns the base URL and the raw
/// heads of the requests received.
async fn stub_backend(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let base = format!("http://{}/", listener.local_addr().expect("local addr"));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            let head = String::from_utf8_lossy(&head).into_owned();
            let request_line = head.lines().next().unwrap_or_default().to_string();
            log.lock().unwrap().push(head);

            let (status, body) = routes
                .iter()
                .find(|r| request_line.starts_with(&format!("{} ", r.request)))
                .map_or((404, "{}"), |r| (r.status, r.body));
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (base, seen)
}

fn actions(base: &str) -> AdminActions<AlwaysConfirm> {
    let client = AdminClient::new(base, CsrfToken::new("s3cr3t")).expect("valid base url");
    AdminActions::new(client, AlwaysConfirm)
}

fn toasts(manager: &Manager<ManualClock>) -> Vec<(Severity, String)> {
    manager
        .visible()
        .map(|t| (t.severity(), t.message().to_string()))
        .collect()
}

#[tokio::test]
async fn delete_book_sends_csrf_header_and_requests_reload() {
    let (base, seen) = stub_backend(vec![route("DELETE /api/books/7/", 204, "")]).await;
    let mut actions = actions(&base);
    let mut button = LoadingButton::new("Delete");
    let mut manager = Manager::with_clock(ManualClock::new());

    let outcome = actions
        .delete_book(7, "Dune", &mut button, &mut manager)
        .await;

    assert_eq!(
        outcome,
        ActionOutcome::Succeeded(Some(ReloadRequest {
            delay: Duration::from_millis(1_000)
        }))
    );
    assert!(button.is_loading());
    assert_eq!(toasts(&manager), vec![(Severity::Success, BOOK_DELETED.to_string())]);

    let seen = seen.lock().unwrap();
    let head = seen[0].to_ascii_lowercase();
    assert!(head.starts_with("delete /api/books/7/ http/1.1"));
    assert!(head.contains("x-csrftoken: s3cr3t"));
    assert!(head.contains("content-type: application/json"));
}

#[tokio::test]
async fn server_error_on_delete_is_reported() {
    let (base, _) = stub_backend(vec![route("DELETE /api/books/7/", 500, "{}")]).await;
    let mut actions = actions(&base);
    let mut button = LoadingButton::new("Delete");
    let mut manager = Manager::with_clock(ManualClock::new());

    let outcome = actions
        .delete_book(7, "Dune", &mut button, &mut manager)
        .await;

    assert_eq!(outcome, ActionOutcome::Failed(ApiError::Status(500)));
    assert_eq!(button.label(), "Delete");
    assert_eq!(
        toasts(&manager),
        vec![(Severity::Error, BOOK_DELETE_FAILED.to_string())]
    );
}

#[tokio::test]
async fn delete_category_succeeds() {
    let (base, _) = stub_backend(vec![route("DELETE /api/categories/2/", 204, "")]).await;
    let mut actions = actions(&base);
    let mut manager = Manager::with_clock(ManualClock::new());

    let outcome = actions.delete_category(2, "Poetry", &mut manager).await;

    assert!(outcome.reload().is_some());
    assert_eq!(
        toasts(&manager),
        vec![(Severity::Success, CATEGORY_DELETED.to_string())]
    );
}

#[tokio::test]
async fn toggle_user_reads_body_whatever_the_status() {
    let (base, _) = stub_backend(vec![
        route("POST /api/users/1/toggle-status/", 200, r#"{"success": true, "is_active": false}"#),
        route(
            "POST /api/users/2/toggle-status/",
            403,
            r#"{"success": false, "message": "Cannot deactivate a superuser"}"#,
        ),
        route("POST /api/users/3/toggle-status/", 200, r#"{"success": false}"#),
    ])
    .await;
    let mut actions = actions(&base);
    let mut manager = Manager::with_clock(ManualClock::new());

    actions.toggle_user_status(1, &mut manager).await;
    let rejected = actions.toggle_user_status(2, &mut manager).await;
    actions.toggle_user_status(3, &mut manager).await;

    assert_eq!(
        rejected,
        ActionOutcome::Failed(ApiError::Rejected(Some(
            "Cannot deactivate a superuser".to_string()
        )))
    );
    assert_eq!(
        toasts(&manager),
        vec![
            (Severity::Success, USER_STATUS_UPDATED.to_string()),
            (Severity::Error, "Cannot deactivate a superuser".to_string()),
            (Severity::Error, USER_STATUS_REJECTED.to_string()),
        ]
    );
}

#[tokio::test]
async fn mark_all_read_accepts_status_body() {
    let (base, _) = stub_backend(vec![route(
        "POST /notifications/mark-all-read/",
        200,
        r#"{"status": "success"}"#,
    )])
    .await;
    let mut actions = actions(&base);

    let outcome = actions.mark_all_read().await;

    assert_eq!(
        outcome,
        ActionOutcome::Succeeded(Some(ReloadRequest {
            delay: Duration::ZERO
        }))
    );
}

#[tokio::test]
async fn edit_book_fetches_then_announces_coming_soon() {
    let (base, seen) = stub_backend(vec![route(
        "GET /api/books/7/",
        200,
        r#"{"id": 7, "title": "Dune", "author": "Frank Herbert", "price": "9.99"}"#,
    )])
    .await;
    let mut actions = actions(&base);
    let mut manager = Manager::with_clock(ManualClock::new());

    let book = actions.edit_book(7, &mut manager).await.expect("book");
    let missing = actions.edit_book(8, &mut manager).await;

    assert_eq!(book.title, "Dune");
    assert_eq!(missing, Err(ApiError::Status(404)));
    assert_eq!(
        toasts(&manager),
        vec![
            (Severity::Info, EDIT_COMING_SOON.to_string()),
            (Severity::Error, BOOK_FETCH_FAILED.to_string()),
        ]
    );
    // Reads carry no CSRF header.
    assert!(!seen.lock().unwrap()[0]
        .to_ascii_lowercase()
        .contains("x-csrftoken"));
}
