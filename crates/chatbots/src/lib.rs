//! Chatbots Domain Library
//!
//! Core domain types and interfaces for chatbot configuration records.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Chatbot and its create/patch shapes
//!   - `value_objects/`: Provider, PromptType
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Page cache interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use chatbots::domain::{Chatbot, NewChatbot, Provider};
//! use chatbots::ports::ChatbotRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    normalize_instructions, Chatbot, ChatbotPatch, DomainError, NewChatbot, PromptType, Provider,
};
pub use ports::{ChatbotRepository, PageCache, CHATBOTS_ADMIN_PATH, CHATBOTS_COLLECTION};
