//! Bounded view over a [`ParsedTable`] for the on-screen preview.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::table::{CellValue, ParsedTable};

/// Maximum number of data rows shown under the header.
pub const PREVIEW_ROW_LIMIT: usize = 5;

/// Caption shown under every preview, whatever the real row count.
pub const PREVIEW_CAPTION: &str = "İlk 5 satır gösteriliyor";

/// Borrowed slice of a table: all headers, at most [`PREVIEW_ROW_LIMIT`] rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TablePreview<'a> {
    pub headers: &'a [String],
    pub rows: &'a [Vec<CellValue>],
    /// Rows of the full table that did not make it into `rows`.
    pub hidden_rows: usize,
}

impl TablePreview<'_> {
    #[must_use]
    pub fn caption(&self) -> &'static str {
        PREVIEW_CAPTION
    }
}

/// Bound `table` to its first [`PREVIEW_ROW_LIMIT`] data rows.
///
/// Cells are passed through untouched; rows longer or shorter than the header
/// are neither padded nor cut.
#[must_use]
pub fn preview(table: &ParsedTable) -> TablePreview<'_> {
    let shown = table.rows.len().min(PREVIEW_ROW_LIMIT);
    TablePreview {
        headers: &table.headers,
        rows: &table.rows[..shown],
        hidden_rows: table.rows.len() - shown,
    }
}
