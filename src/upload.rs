// SPDX-License-Identifier: MPL-2.0
//! Cover image upload: drop zone, selected files and the image preview.

use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::error::Result;
use crate::ui::state::{DragEvent, DragState};
use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;

/// A file picked or dropped by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime_from_path(path), data))
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// `data:` URL embedding the file contents.
    #[must_use]
    pub fn data_url(&self) -> String {
        data_url(&self.mime, &self.data)
    }
}

/// Builds a base64 `data:` URL.
#[must_use]
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(data))
}

fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// State of the upload field.
#[derive(Debug, Default)]
pub struct FileUpload {
    zone: DragState,
    files: Vec<UploadFile>,
    preview: Option<String>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl FileUpload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Handles a drag event over the drop zone.
    ///
    /// A drop replaces the selected files when it carries at least one.
    pub fn drag(&mut self, event: DragEvent, dropped: Vec<UploadFile>) {
        self.zone.handle(event);
        if event == DragEvent::Drop && !dropped.is_empty() {
            if let Some(handle) = &self.diagnostics {
                handle.log_action(UserAction::DropFiles {
                    count: dropped.len(),
                });
            }
            self.select(dropped);
        }
    }

    /// Replaces the selected files, as a change of the file input does.
    ///
    /// The preview shows the first file when it is an image, and nothing otherwise.
    pub fn select(&mut self, files: Vec<UploadFile>) {
        self.files = files;
        self.preview = self
            .files
            .first()
            .filter(|f| f.is_image())
            .map(UploadFile::data_url);
    }

    /// Empties both the selection and the preview.
    pub fn clear(&mut self) {
        self.files.clear();
        self.preview = None;
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.zone.is_highlighted
    }

    #[must_use]
    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }
}
