//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the page cache.

mod chatbot_service;

pub use chatbot_service::ChatbotService;

#[cfg(test)]
pub(crate) use chatbot_service::tests::FailingRepository;
