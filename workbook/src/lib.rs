//! # workbook
//!
//! Spreadsheet decoding and preview shaping for the debt-tracking front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate reads a dropped file's bytes in the browser and hands
//! them here. This crate knows nothing about the DOM or the server: it turns
//! bytes into a [`ParsedTable`] and bounds that table into a
//! [`TablePreview`] for rendering. Both halves are pure so they run
//! unchanged under WASM and in native unit tests.

pub mod decode;
pub mod preview;
pub mod table;

pub use decode::{DecodeError, decode_first_sheet};
pub use preview::{PREVIEW_CAPTION, PREVIEW_ROW_LIMIT, TablePreview, preview};
pub use table::{CellValue, ParsedTable};
