//! Reusable view components for the send-message workflow and app chrome.

pub mod side_bar;
pub mod step_indicator;
pub mod upload_excel;
pub mod view_excel;
