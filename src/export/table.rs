// SPDX-License-Identifier: MPL-2.0
//! Extraction of cell text from a rendered HTML table.
//!
//! The markup must be well-formed (XHTML-style). Mismatched end tags are
//! tolerated so that unclosed void elements such as `<br>` do not abort the
//! parse.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Cell texts of a table, one `Vec` per `<tr>`, in document order.
pub type Rows = Vec<Vec<String>>;

/// Returns the rows of the first `<table>` carrying `class_name` in its
/// `class` attribute, or `None` if there is no such table.
///
/// Each cell is the trimmed text content of a `<th>` or `<td>`, including
/// text of nested elements.
pub fn extract_rows(html: &str, class_name: &str) -> Result<Option<Rows>> {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;

    let mut rows: Rows = Vec::new();
    // Depth of <table> nesting inside the target table; 0 = not inside.
    let mut table_depth = 0usize;
    let mut found = false;
    let mut row: Option<Vec<String>> = None;
    let mut cell: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"table" if table_depth > 0 => table_depth += 1,
                    b"table" if !found && has_class(e, class_name) => {
                        found = true;
                        table_depth = 1;
                    }
                    b"tr" if table_depth == 1 => row = Some(Vec::new()),
                    b"td" | b"th" if table_depth == 1 && row.is_some() => {
                        cell = Some(String::new());
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                // <td/> is an empty cell
                let name = e.local_name();
                if table_depth == 1 && matches!(name.as_ref(), b"td" | b"th") {
                    if let Some(row) = row.as_mut() {
                        row.push(String::new());
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(cell) = cell.as_mut() {
                    match e.unescape() {
                        Ok(text) => cell.push_str(&text),
                        Err(_) => cell.push_str(&String::from_utf8_lossy(e)),
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(cell) = cell.as_mut() {
                    cell.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"td" | b"th" if table_depth == 1 => {
                        if let (Some(text), Some(row)) = (cell.take(), row.as_mut()) {
                            row.push(text.trim().to_string());
                        }
                    }
                    b"tr" if table_depth == 1 => {
                        if let Some(row) = row.take() {
                            rows.push(row);
                        }
                    }
                    b"table" if table_depth > 0 => {
                        table_depth -= 1;
                        if table_depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::from(e)),
            _ => {}
        }
    }

    Ok(found.then_some(rows))
}

fn has_class(element: &BytesStart<'_>, class_name: &str) -> bool {
    element
        .try_get_attribute("class")
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
        .is_some_and(|value| value.split_whitespace().any(|c| c == class_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
<div>
  <table class="data"><tr><td>ignored</td></tr></table>
  <table class="modern-table striped">
    <thead>
      <tr><th>Title</th><th>Author</th><th>Actions</th></tr>
    </thead>
    <tbody>
      <tr>
        <td> Dune </td>
        <td><span>Frank</span> <b>Herbert</b></td>
        <td><button>Edit</button></td>
      </tr>
      <tr><td>Emma &amp; Co</td><td/><td></td></tr>
    </tbody>
  </table>
</div>"#;

    #[test]
    fn extracts_rows_of_matching_table() {
        let rows = extract_rows(TABLE, "modern-table").unwrap().unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["Title", "Author", "Actions"],
                vec!["Dune", "Frank Herbert", "Edit"],
                vec!["Emma & Co", "", ""],
            ]
        );
    }

    #[test]
    fn missing_table_is_none() {
        assert_eq!(extract_rows("<div><p>No books</p></div>", "modern-table").unwrap(), None);
    }

    #[test]
    fn nested_tables_do_not_leak_rows() {
        let html = r#"<table class="modern-table"><tr><td>a</td><td><table><tr><td>x</td></tr></table></td></tr></table>"#;
        let rows = extract_rows(html, "modern-table").unwrap().unwrap();
        assert_eq!(rows, vec![vec!["a", "x"]]);
    }

    #[test]
    fn unclosed_void_elements_are_tolerated() {
        let html = r#"<table class="modern-table"><tr><td>a<br>b</td><td>c</td></tr></table>"#;
        let rows = extract_rows(html, "modern-table").unwrap();
        assert!(rows.is_some());
    }
}
