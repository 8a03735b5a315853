//! Chatbot Application Service (Use Case)
//!
//! Every operation returns an explicit result; failures are logged here and
//! handed to the caller unchanged. Successful writes invalidate the cached
//! admin listing.

use std::sync::Arc;

use chatbots::{
    Chatbot, ChatbotPatch, ChatbotRepository, DomainError, NewChatbot, PageCache,
    CHATBOTS_ADMIN_PATH,
};

/// Application service for Chatbot operations
pub struct ChatbotService<R: ChatbotRepository + ?Sized> {
    repo: Arc<R>,
    pages: Arc<dyn PageCache>,
}

fn logged<T>(operation: &str, result: Result<T, DomainError>) -> Result<T, DomainError> {
    if let Err(e) = &result {
        match e {
            DomainError::Repository(_) => tracing::error!("Error {} chatbot: {}", operation, e),
            _ => tracing::warn!("Rejected {} chatbot: {}", operation, e),
        }
    }
    result
}

impl<R: ChatbotRepository + ?Sized> ChatbotService<R> {
    pub fn new(repo: Arc<R>, pages: Arc<dyn PageCache>) -> Self {
        Self { repo, pages }
    }

    /// List all chatbots
    pub async fn list(&self) -> Result<Vec<Chatbot>, DomainError> {
        logged("listing", self.repo.find_all().await)
    }

    /// Get a chatbot by ID
    pub async fn get(&self, id: &str) -> Result<Option<Chatbot>, DomainError> {
        logged("fetching", self.repo.find_by_id(id).await)
    }

    /// Create a new chatbot; the store assigns its id
    pub async fn create(&self, chatbot: NewChatbot) -> Result<Chatbot, DomainError> {
        let result = match chatbot.validate() {
            Ok(()) => self.repo.insert(&chatbot).await,
            Err(e) => Err(e),
        };
        let created = logged("adding", result)?;

        self.pages.invalidate(CHATBOTS_ADMIN_PATH);
        tracing::info!("Created Chatbot: {} ({})", created.name, created.id);

        Ok(created)
    }

    /// Merge the supplied fields into a chatbot and return the stored result
    pub async fn update(&self, id: &str, patch: ChatbotPatch) -> Result<Chatbot, DomainError> {
        let result = match patch.validate() {
            Ok(()) => self.repo.update(id, &patch).await,
            Err(e) => Err(e),
        };
        let updated = logged("updating", result)?;

        self.pages.invalidate(CHATBOTS_ADMIN_PATH);
        tracing::info!("Updated Chatbot: {} ({})", updated.name, updated.id);

        Ok(updated)
    }

    /// Delete a chatbot. A missing id is not an error.
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = logged("deleting", self.repo.delete(id).await)?;
        self.pages.invalidate(CHATBOTS_ADMIN_PATH);

        if deleted {
            tracing::info!("Deleted Chatbot: {}", id);
        } else {
            tracing::debug!("Chatbot {} already absent", id);
        }
        Ok(deleted)
    }
}
