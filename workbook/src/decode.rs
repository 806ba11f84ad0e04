//! Decode raw workbook bytes into the first sheet's [`ParsedTable`].
//!
//! DESIGN
//! ======
//! Format detection is left to `calamine`, which tries xls, xlsx/xlsm, xlsb
//! and ods in turn. Only the first sheet in the workbook's declared order is
//! read. Cells are copied row-major keyed by position, never by header name,
//! so duplicate or blank headers are harmless.
//!
//! Each row drops its trailing empty cells; interior empties stay as
//! [`CellValue::Blank`] so later columns keep their position.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::table::{CellValue, ParsedTable};

/// Error returned by [`decode_first_sheet`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not a workbook in any supported format.
    #[error("not a readable spreadsheet: {0}")]
    Workbook(#[source] calamine::Error),
    /// The workbook declares no sheets.
    #[error("workbook contains no sheets")]
    NoSheets,
    /// The first sheet exists but its cells could not be read.
    #[error("sheet '{name}' could not be read: {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::Error,
    },
}

/// Decode `bytes` as a workbook and return its first sheet as a table.
///
/// # Errors
///
/// Returns [`DecodeError::Workbook`] for bytes that are not a spreadsheet,
/// [`DecodeError::NoSheets`] for a workbook without sheets and
/// [`DecodeError::Sheet`] when the first sheet's data is malformed.
pub fn decode_first_sheet(bytes: &[u8]) -> Result<ParsedTable, DecodeError> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(DecodeError::Workbook)?;
    let name = sheets.sheet_names().into_iter().next().ok_or(DecodeError::NoSheets)?;
    let range = sheets
        .worksheet_range_at(0)
        .ok_or(DecodeError::NoSheets)?
        .map_err(|source| DecodeError::Sheet { name, source })?;

    let grid = range.rows().map(row_values).collect();
    Ok(ParsedTable::from_grid(grid))
}

fn row_values(row: &[Data]) -> Vec<CellValue> {
    let used = row
        .iter()
        .rposition(|cell| !matches!(cell, Data::Empty))
        .map_or(0, |last| last + 1);
    row[..used].iter().map(cell_value).collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Blank,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
