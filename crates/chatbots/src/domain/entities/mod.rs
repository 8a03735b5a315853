//! Domain Entities
//!
//! - Chatbot: a configured assistant (name, AI provider, prompt type, instructions)

mod chatbot;

pub use chatbot::*;
