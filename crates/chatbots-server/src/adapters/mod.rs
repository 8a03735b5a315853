//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod mongo;
pub mod page_cache;

// Re-exports
pub use memory::InMemoryChatbotRepository;
pub use mongo::MongoChatbotRepository;
pub use page_cache::RenderCache;
