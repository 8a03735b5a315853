//! In-memory implementation of ChatbotRepository
//!
//! Keeps records in insertion order. Used when no document store is
//! configured and as the store in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use chatbots::{Chatbot, ChatbotPatch, ChatbotRepository, DomainError, NewChatbot};

type IdSource = Box<dyn Fn() -> String + Send + Sync>;

/// In-memory implementation of ChatbotRepository
pub struct InMemoryChatbotRepository {
    records: RwLock<Vec<Chatbot>>,
    next_id: IdSource,
}

impl InMemoryChatbotRepository {
    pub fn new() -> Self {
        Self::with_id_source(|| uuid::Uuid::new_v4().simple().to_string())
    }

    /// Use a custom generator for store-assigned ids
    pub fn with_id_source<F>(next_id: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: Box::new(next_id),
        }
    }
}

impl Default for InMemoryChatbotRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatbotRepository for InMemoryChatbotRepository {
    async fn find_all(&self) -> Result<Vec<Chatbot>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chatbot>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, chatbot: &NewChatbot) -> Result<Chatbot, DomainError> {
        let mut records = self.records.write().await;
        let id = (self.next_id)();
        if records.iter().any(|c| c.id == id) {
            return Err(DomainError::Repository(format!("Duplicate chatbot id {}", id)));
        }

        let created = chatbot.clone().with_id(id);
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &ChatbotPatch) -> Result<Chatbot, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Chatbot", id))?;

        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|c| c.id != id);
        Ok(records.len() < before)
    }
}
