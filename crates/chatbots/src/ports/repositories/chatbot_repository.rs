//! Chatbot Repository Port
//!
//! Abstract interface for Chatbot persistence operations.
//! Records live in a single document collection keyed by store-generated ids.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Chatbot, ChatbotPatch, NewChatbot};

/// Name of the collection holding chatbot documents
pub const CHATBOTS_COLLECTION: &str = "chatbots";

/// Repository interface for Chatbot entities
#[async_trait]
pub trait ChatbotRepository: Send + Sync {
    /// Find all chatbots in the collection
    async fn find_all(&self) -> Result<Vec<Chatbot>, DomainError>;

    /// Find a chatbot by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Chatbot>, DomainError>;

    /// Insert a new chatbot; the store assigns the id
    async fn insert(&self, chatbot: &NewChatbot) -> Result<Chatbot, DomainError>;

    /// Merge the supplied fields into an existing chatbot and return the
    /// record as stored after the write.
    /// Returns `NotFound` when no record has this id.
    async fn update(&self, id: &str, patch: &ChatbotPatch) -> Result<Chatbot, DomainError>;

    /// Delete a chatbot by ID.
    /// Returns true if the chatbot was deleted, false if it was not found.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
