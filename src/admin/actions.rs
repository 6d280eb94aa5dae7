// SPDX-License-Identifier: MPL-2.0
//! Row actions of the admin tables.
//!
//! Each action asks for confirmation where it is destructive, calls the
//! backend, and reports the outcome with a toast. Successful mutations ask
//! the page to reload so the tables reflect the change.

use super::client::{AdminClient, Book};
use crate::config::defaults::RELOAD_DELAY_MS;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, UserAction};
use crate::error::ApiError;
use crate::timing::Clock;
use crate::ui::notifications::{Manager, Severity, ToastRequest};
use crate::ui::state::LoadingButton;
use std::time::Duration;

pub const BOOK_DELETED: &str = "Book deleted successfully";
pub const BOOK_DELETE_FAILED: &str = "Error deleting book";
pub const CATEGORY_DELETED: &str = "Category deleted successfully";
pub const CATEGORY_DELETE_FAILED: &str = "Error deleting category";
pub const USER_STATUS_UPDATED: &str = "User status updated";
pub const USER_STATUS_REJECTED: &str = "Failed to update user status";
pub const USER_STATUS_FAILED: &str = "Error updating user status";
pub const EDIT_COMING_SOON: &str = "Edit functionality coming soon";
pub const BOOK_FETCH_FAILED: &str = "Error fetching book data";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Accepts every prompt, for non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// The page should be reloaded after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadRequest {
    pub delay: Duration,
}

impl ReloadRequest {
    /// Reload after the success toast has had time to be read.
    #[must_use]
    pub fn after_toast() -> Self {
        Self {
            delay: Duration::from_millis(RELOAD_DELAY_MS),
        }
    }

    #[must_use]
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

/// Result of a row action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Succeeded(Option<ReloadRequest>),
    Failed(ApiError),
}

impl ActionOutcome {
    #[must_use]
    pub fn reload(&self) -> Option<ReloadRequest> {
        match self {
            ActionOutcome::Succeeded(reload) => *reload,
            _ => None,
        }
    }
}

#[must_use]
pub fn delete_book_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{title}\"?\n\nThis action cannot be undone.")
}

#[must_use]
pub fn delete_category_prompt(name: &str) -> String {
    format!(
        "Are you sure you want to delete the category \"{name}\"?\n\n\
         This will affect all books in this category."
    )
}

pub const TOGGLE_USER_PROMPT: &str = "Are you sure you want to change this user's status?";

/// Detail page of a user.
#[must_use]
pub fn view_user_url(id: u64) -> String {
    format!("/admin/users/{id}/")
}

/// Detail page of a book issue.
#[must_use]
pub fn view_issue_url(id: u64) -> String {
    format!("/admin/issues/{id}/")
}

/// Admin row actions bound to a backend and a confirmation prompt.
#[derive(Debug)]
pub struct AdminActions<P> {
    client: AdminClient,
    prompt: P,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<P: Confirm> AdminActions<P> {
    pub fn new(client: AdminClient, prompt: P) -> Self {
        Self {
            client,
            prompt,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    /// Deletes a book after confirmation.
    ///
    /// `button` shows "Loading..." while the request runs. On success it stays
    /// disabled since the page is about to reload; on failure it is restored.
    pub async fn delete_book<C: Clock>(
        &mut self,
        id: u64,
        title: &str,
        button: &mut LoadingButton,
        toasts: &mut Manager<C>,
    ) -> ActionOutcome {
        if !self.ask(&delete_book_prompt(title)) {
            return ActionOutcome::Declined;
        }
        self.log(UserAction::DeleteBook { id });

        button.set_loading(true);
        match self.client.delete_book(id).await {
            Ok(()) => {
                toasts.success(BOOK_DELETED, None);
                ActionOutcome::Succeeded(Some(ReloadRequest::after_toast()))
            }
            Err(err) => {
                button.set_loading(false);
                toasts.notify(api_error_toast(BOOK_DELETE_FAILED));
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Deletes a category after confirmation.
    pub async fn delete_category<C: Clock>(
        &mut self,
        id: u64,
        name: &str,
        toasts: &mut Manager<C>,
    ) -> ActionOutcome {
        if !self.ask(&delete_category_prompt(name)) {
            return ActionOutcome::Declined;
        }
        self.log(UserAction::DeleteCategory { id });

        match self.client.delete_category(id).await {
            Ok(()) => {
                toasts.success(CATEGORY_DELETED, None);
                ActionOutcome::Succeeded(Some(ReloadRequest::after_toast()))
            }
            Err(err) => {
                toasts.notify(api_error_toast(CATEGORY_DELETE_FAILED));
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Activates or deactivates a user after confirmation.
    ///
    /// A refusal from the server is shown with the server's own reason.
    pub async fn toggle_user_status<C: Clock>(
        &mut self,
        id: u64,
        toasts: &mut Manager<C>,
    ) -> ActionOutcome {
        if !self.ask(TOGGLE_USER_PROMPT) {
            return ActionOutcome::Declined;
        }
        self.log(UserAction::ToggleUserStatus { id });

        match self.client.toggle_user_status(id).await {
            Ok(()) => {
                toasts.success(USER_STATUS_UPDATED, None);
                ActionOutcome::Succeeded(Some(ReloadRequest::after_toast()))
            }
            Err(err) => {
                let message = match &err {
                    ApiError::Rejected(_) => err
                        .server_message()
                        .unwrap_or(USER_STATUS_REJECTED)
                        .to_string(),
                    _ => USER_STATUS_FAILED.to_string(),
                };
                toasts.notify(api_error_toast(message));
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Loads a book for editing. Editing itself is not available yet.
    pub async fn edit_book<C: Clock>(
        &mut self,
        id: u64,
        toasts: &mut Manager<C>,
    ) -> Result<Book, ApiError> {
        match self.client.fetch_book(id).await {
            Ok(book) => {
                toasts.notify(ToastRequest::with_severity(EDIT_COMING_SOON, Severity::Info));
                Ok(book)
            }
            Err(err) => {
                toasts.notify(api_error_toast(BOOK_FETCH_FAILED));
                Err(err)
            }
        }
    }

    pub fn edit_category<C: Clock>(&mut self, _id: u64, toasts: &mut Manager<C>) {
        toasts.notify(ToastRequest::with_severity(EDIT_COMING_SOON, Severity::Info));
    }

    /// Marks all notifications read and reloads straight away.
    ///
    /// Failures are only recorded in diagnostics.
    pub async fn mark_all_read(&mut self) -> ActionOutcome {
        self.log(UserAction::MarkAllRead);
        match self.client.mark_all_read().await {
            Ok(()) => ActionOutcome::Succeeded(Some(ReloadRequest::immediate())),
            Err(err) => {
                if let Some(handle) = &self.diagnostics {
                    handle.log_error(ErrorEvent::new(ErrorType::Api, err.to_string()));
                }
                ActionOutcome::Failed(err)
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> bool {
        let confirmed = self.prompt.confirm(prompt);
        if !confirmed {
            self.log(UserAction::CancelAction);
        }
        confirmed
    }

    fn log(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}

fn api_error_toast(message: impl Into<String>) -> ToastRequest {
    ToastRequest::with_severity(message, Severity::Error).with_error_type(ErrorType::Api)
}
