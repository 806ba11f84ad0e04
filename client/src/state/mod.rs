//! Client-side state for the send-message workflow.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods. Pages wrap
//! them in `RwSignal`s; tests drive the transitions directly without a DOM.

pub mod intake;
pub mod upload;
