//! Row-oriented table model decoded from the first worksheet.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;

/// A loosely typed scalar read from one worksheet cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Integers, floats and date serials all land here.
    Number(f64),
    Bool(bool),
    /// An empty cell sitting between two populated ones.
    #[default]
    Blank,
}

impl CellValue {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Blank => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Header row plus every data row of a sheet.
///
/// Rows are kept exactly as decoded: a row may be shorter or longer than
/// `headers`, and a blank spreadsheet row is an empty `Vec`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ParsedTable {
    /// Split a row-major grid into header row and data rows.
    ///
    /// An empty grid yields an empty table.
    #[must_use]
    pub fn from_grid(grid: Vec<Vec<CellValue>>) -> Self {
        let mut grid = grid.into_iter();
        let headers = grid
            .next()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        Self { headers, rows: grid.collect() }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}
