//! Selected-file and preview state owned by the send-message page.
//!
//! DESIGN
//! ======
//! The page is the single owner of the selected file. The drop zone only
//! reports a pick, and the preview is derived from whatever decode result is
//! stored here.
//!
//! Every selection gets a fresh [`FileId`]. Decode tasks carry the id they
//! were started for, and [`UploadState::finish_decode`] drops results whose
//! id is no longer current, so a slow decode of an earlier file can never
//! overwrite the preview of a later one.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::fmt;

use workbook::ParsedTable;

/// Identity of one selection. Increases with every pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Metadata of the file the user picked. The browser handle itself travels
/// with the decode task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
}

/// What the preview area should show.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PreviewState {
    /// No file selected yet.
    #[default]
    Empty,
    /// Bytes are being read and decoded.
    Loading(FileId),
    Ready { file: FileId, table: ParsedTable },
    /// Read or decode failed; `reason` is shown to the user.
    Failed { file: FileId, reason: String },
}

/// Position in the two-step send workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Waiting for an Excel file.
    Upload,
    /// A file is present; the send action is available.
    Send,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub preview: PreviewState,
    last_id: u64,
}

impl UploadState {
    /// Replace the selected file and start waiting for its decode.
    pub fn select(&mut self, name: impl Into<String>, size: u64) -> FileId {
        self.last_id += 1;
        let id = FileId(self.last_id);
        self.selected = Some(SelectedFile { id, name: name.into(), size });
        self.preview = PreviewState::Loading(id);
        id
    }

    /// Store the decode result for `file`.
    ///
    /// Returns `false` and leaves the state untouched when `file` has since
    /// been replaced by a newer selection.
    pub fn finish_decode<E: fmt::Display>(&mut self, file: FileId, result: Result<ParsedTable, E>) -> bool {
        if !self.is_current(file) {
            return false;
        }
        self.preview = match result {
            Ok(table) => PreviewState::Ready { file, table },
            Err(err) => PreviewState::Failed { file, reason: err.to_string() },
        };
        true
    }

    #[must_use]
    pub fn is_current(&self, file: FileId) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == file)
    }

    /// The send action is enabled exactly when a file is selected.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.name.as_str())
    }

    /// Decoded table of the current file, once available.
    #[must_use]
    pub fn table(&self) -> Option<&ParsedTable> {
        match &self.preview {
            PreviewState::Ready { table, .. } => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        if self.can_send() { Step::Send } else { Step::Upload }
    }
}
