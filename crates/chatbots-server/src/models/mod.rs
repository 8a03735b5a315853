//! API Data Models
//!
//! Request/response DTOs for the JSON API.

mod chatbot;

pub use chatbot::*;
