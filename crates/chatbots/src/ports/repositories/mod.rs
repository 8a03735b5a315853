//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod chatbot_repository;

pub use chatbot_repository::*;
