//! Routed page components.

pub mod send_message;
pub mod view_responses;
