//! Drop-zone highlight state and the first-file rule for intake.
//!
//! DESIGN
//! ======
//! The highlight flag is visual feedback only and never touches the selected
//! file. Drop handling always ends the drag, and only the first file of a
//! multi-file drop is taken; the rest are ignored without complaint.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

/// Drag lifecycle events the drop zone listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

/// Highlight state of the drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZoneState {
    pub dragging: bool,
}

impl DropZoneState {
    /// Apply a non-drop drag event.
    pub fn apply(&mut self, phase: DragPhase) {
        match phase {
            DragPhase::Enter => self.dragging = true,
            DragPhase::Leave => self.dragging = false,
            DragPhase::Over => {}
        }
    }

    /// Finish a drag with a drop and pick the file to publish, if any.
    pub fn drop_files<T>(&mut self, files: impl IntoIterator<Item = T>) -> Option<T> {
        self.dragging = false;
        first_file(files)
    }
}

/// First entry of a file list; `None` for an empty list.
pub fn first_file<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}
