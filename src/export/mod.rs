// SPDX-License-Identifier: MPL-2.0
//! CSV export of the books table.
//!
//! The last column of the table holds the row actions (edit/delete buttons)
//! and is left out of the export. Cells are joined with `,` and rows with
//! `\n`, without quoting.

pub mod table;

use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::error::Result;
use crate::timing::Clock;
use crate::ui::notifications::{Manager, Severity, ToastRequest};
use std::fs;
use std::path::{Path, PathBuf};

pub use table::{extract_rows, Rows};

/// Class of the table the admin pages render their listings in.
pub const TABLE_CLASS: &str = "modern-table";

/// Renders `rows` as CSV, dropping the last cell of every row.
#[must_use]
pub fn rows_to_csv(rows: &Rows) -> String {
    rows.iter()
        .map(|row| {
            let kept = row.len().saturating_sub(1);
            row[..kept].join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download file name for an export started at `unix_millis`.
#[must_use]
pub fn export_file_name(unix_millis: i64) -> String {
    format!("books_{unix_millis}.csv")
}

/// Exports the books table found in `html` into `out_dir`.
///
/// Shows "Preparing export..." first, and "Export completed" once the file
/// is written. Returns `None` when the page has no books table.
pub fn export_books<C: Clock>(
    html: &str,
    out_dir: &Path,
    toasts: &mut Manager<C>,
    diagnostics: Option<&DiagnosticsHandle>,
) -> Result<Option<PathBuf>> {
    export_books_at(
        html,
        out_dir,
        chrono::Utc::now().timestamp_millis(),
        toasts,
        diagnostics,
    )
}

/// Like [`export_books`], with an explicit timestamp for the file name.
pub fn export_books_at<C: Clock>(
    html: &str,
    out_dir: &Path,
    unix_millis: i64,
    toasts: &mut Manager<C>,
    diagnostics: Option<&DiagnosticsHandle>,
) -> Result<Option<PathBuf>> {
    toasts.notify(ToastRequest::with_severity(
        "Preparing export...",
        Severity::Info,
    ));

    let Some(rows) = extract_rows(html, TABLE_CLASS)? else {
        return Ok(None);
    };

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(export_file_name(unix_millis));
    fs::write(&path, rows_to_csv(&rows))?;

    if let Some(handle) = diagnostics {
        handle.log_action(UserAction::ExportBooks { rows: rows.len() });
    }
    toasts.notify(ToastRequest::success("Export completed"));
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;
    use tempfile::tempdir;

    const PAGE: &str = r#"<main><table class="modern-table">
<tr><th>ID</th><th>Title</th><th>Actions</th></tr>
<tr><td>1</td><td>Dune</td><td><button>Delete</button></td></tr>
<tr><td>2</td><td>Emma</td><td><button>Delete</button></td></tr>
</table></main>"#;

    fn rows(data: &[&[&str]]) -> Rows {
        data.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    #[test]
    fn csv_skips_last_column() {
        let csv = rows_to_csv(&rows(&[&["ID", "Title", "Actions"], &["1", "Dune", "x"]]));
        assert_eq!(csv, "ID,Title\n1,Dune");
    }

    #[test]
    fn single_cell_rows_become_empty_lines() {
        let csv = rows_to_csv(&rows(&[&["only"], &[], &["a", "b"]]));
        assert_eq!(csv, "\n\na");
    }

    #[test]
    fn file_name_uses_timestamp() {
        assert_eq!(export_file_name(1_700_000_000_123), "books_1700000000123.csv");
    }

    #[test]
    fn export_writes_file_and_notifies() {
        let dir = tempdir().expect("create temp dir");
        let mut toasts = Manager::with_clock(ManualClock::new());

        let path = export_books_at(PAGE, dir.path(), 42, &mut toasts, None)
            .expect("export")
            .expect("table present");

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("books_42.csv"));
        assert_eq!(
            fs::read_to_string(&path).expect("read export"),
            "ID,Title\n1,Dune\n2,Emma"
        );
        let messages: Vec<_> = toasts.visible().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["Preparing export...", "Export completed"]);
    }

    #[test]
    fn missing_table_only_announces_preparation() {
        let dir = tempdir().expect("create temp dir");
        let mut toasts = Manager::with_clock(ManualClock::new());

        let result = export_books_at("<p>empty</p>", dir.path(), 1, &mut toasts, None).expect("export");

        assert!(result.is_none());
        assert_eq!(toasts.active_count(), 1);
        assert!(fs::read_dir(dir.path()).expect("read dir").next().is_none());
    }

    #[test]
    fn preparing_toast_uses_general_duration() {
        let dir = tempdir().expect("create temp dir");
        let clock = ManualClock::new();
        let mut toasts = Manager::with_clock(clock.clone());

        export_books_at("<p>empty</p>", dir.path(), 1, &mut toasts, None).expect("export");

        // 4000 ms on screen plus the 400 ms exit animation.
        clock.advance_ms(4_399);
        toasts.tick();
        assert_eq!(toasts.active_count(), 1);
        clock.advance_ms(1);
        toasts.tick();
        assert_eq!(toasts.active_count(), 0);
    }
}
