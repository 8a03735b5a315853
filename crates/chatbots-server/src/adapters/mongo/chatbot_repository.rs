//! MongoDB implementation of ChatbotRepository

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use chatbots::{
    normalize_instructions, Chatbot, ChatbotPatch, ChatbotRepository, DomainError, NewChatbot,
    PromptType, Provider, CHATBOTS_COLLECTION,
};

/// MongoDB implementation of ChatbotRepository
pub struct MongoChatbotRepository {
    collection: Collection<ChatbotDocument>,
    /// Untyped view of the same collection; reads decode per document
    raw: Collection<Document>,
}

impl MongoChatbotRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CHATBOTS_COLLECTION),
            raw: db.collection(CHATBOTS_COLLECTION),
        }
    }
}

/// Stored document shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ChatbotDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    provider: i32,
    #[serde(rename = "promptType")]
    prompt_type: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl From<&NewChatbot> for ChatbotDocument {
    fn from(chatbot: &NewChatbot) -> Self {
        Self {
            id: None,
            name: chatbot.name.clone(),
            provider: chatbot.provider.code(),
            prompt_type: chatbot.prompt_type.code(),
            instructions: normalize_instructions(chatbot.instructions.clone()),
        }
    }
}

impl TryFrom<ChatbotDocument> for Chatbot {
    type Error = DomainError;

    fn try_from(document: ChatbotDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| DomainError::Repository("Chatbot document without _id".to_string()))?;
        let provider = Provider::try_from(document.provider).map_err(DomainError::Repository)?;

        Ok(Self {
            id: id.to_hex(),
            name: document.name,
            provider,
            prompt_type: PromptType::new(document.prompt_type),
            instructions: normalize_instructions(document.instructions),
        })
    }
}

fn decode(document: Document) -> Result<Chatbot, DomainError> {
    let stored: ChatbotDocument = bson::from_document(document).map_err(DomainError::repository)?;
    Chatbot::try_from(stored)
}

/// Decode a listed document, or warn and skip it
fn readable(document: Document) -> Option<Chatbot> {
    let id = document
        .get_object_id("_id")
        .map(|oid| oid.to_hex())
        .unwrap_or_default();
    match decode(document) {
        Ok(chatbot) => Some(chatbot),
        Err(e) => {
            tracing::warn!("Skipping unreadable chatbot document {}: {}", id, e);
            None
        }
    }
}

/// Ids that are not valid ObjectIds cannot name a stored record
fn object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// Translate a patch into `$set` / `$unset` operators
fn update_document(patch: &ChatbotPatch) -> Document {
    let mut set = Document::new();
    let mut unset = Document::new();

    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(provider) = patch.provider {
        set.insert("provider", provider.code());
    }
    if let Some(prompt_type) = patch.prompt_type {
        set.insert("promptType", prompt_type.code());
    }
    if let Some(instructions) = &patch.instructions {
        match normalize_instructions(Some(instructions.clone())) {
            Some(text) => {
                set.insert("instructions", text);
            }
            None => {
                unset.insert("instructions", "");
            }
        }
    }

    let mut update = Document::new();
    if !set.is_empty() {
        update.insert("$set", set);
    }
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    update
}

#[async_trait]
impl ChatbotRepository for MongoChatbotRepository {
    async fn find_all(&self) -> Result<Vec<Chatbot>, DomainError> {
        let mut cursor = self
            .raw
            .find(None, None)
            .await
            .map_err(DomainError::repository)?;

        let mut chatbots = Vec::new();
        while let Some(document) = cursor.next().await {
            let document = document.map_err(DomainError::repository)?;
            chatbots.extend(readable(document));
        }

        Ok(chatbots)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chatbot>, DomainError> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };

        let document = self
            .raw
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(DomainError::repository)?;

        document.map(decode).transpose()
    }

    async fn insert(&self, chatbot: &NewChatbot) -> Result<Chatbot, DomainError> {
        let result = self
            .collection
            .insert_one(ChatbotDocument::from(chatbot), None)
            .await
            .map_err(DomainError::repository)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DomainError::Repository("Store returned a non-ObjectId key".to_string())
        })?;

        Ok(chatbot.clone().with_id(id.to_hex()))
    }

    async fn update(&self, id: &str, patch: &ChatbotPatch) -> Result<Chatbot, DomainError> {
        let oid = object_id(id).ok_or_else(|| DomainError::not_found("Chatbot", id))?;
        let update = update_document(patch);

        if update.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Chatbot", id));
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let document = self
            .raw
            .find_one_and_update(doc! { "_id": oid }, update, options)
            .await
            .map_err(DomainError::repository)?
            .ok_or_else(|| DomainError::not_found("Chatbot", id))?;

        decode(document)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let Some(oid) = object_id(id) else {
            return Ok(false);
        };

        let result = self
            .raw
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(DomainError::repository)?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_sets_only_supplied_fields() {
        let patch = ChatbotPatch {
            name: Some("Support v2".to_string()),
            ..Default::default()
        };
        let update = update_document(&patch);

        assert_eq!(update, doc! { "$set": { "name": "Support v2" } });
    }

    #[test]
    fn test_blank_instructions_unset() {
        let patch = ChatbotPatch {
            provider: Some(Provider::OpenAI),
            instructions: Some(String::new()),
            ..Default::default()
        };
        let update = update_document(&patch);

        assert_eq!(
            update,
            doc! { "$set": { "provider": 2 }, "$unset": { "instructions": "" } }
        );
        assert!(update_document(&ChatbotPatch::default()).is_empty());
    }

    #[test]
    fn test_document_to_chatbot() {
        let oid = ObjectId::new();
        let document = ChatbotDocument {
            id: Some(oid),
            name: "Support".to_string(),
            provider: 1,
            prompt_type: 2,
            instructions: Some(String::new()),
        };
        let chatbot = Chatbot::try_from(document).unwrap();

        assert_eq!(chatbot.id, oid.to_hex());
        assert_eq!(chatbot.provider, Provider::Google);
        assert_eq!(chatbot.prompt_type, PromptType::new(2));
        assert_eq!(chatbot.instructions, None);
    }

    #[test]
    fn test_unknown_provider_is_unreadable() {
        let document = ChatbotDocument {
            id: Some(ObjectId::new()),
            name: "Legacy".to_string(),
            provider: 9,
            prompt_type: 1,
            instructions: None,
        };
        assert!(matches!(
            Chatbot::try_from(document),
            Err(DomainError::Repository(_))
        ));
    }

    #[test]
    fn test_undecodable_documents_skipped() {
        let oid = ObjectId::new();
        let good = doc! { "_id": oid, "name": "Support", "provider": 2, "promptType": 1 };
        let chatbot = readable(good).unwrap();
        assert_eq!(chatbot.id, oid.to_hex());
        assert_eq!(chatbot.provider, Provider::OpenAI);

        let missing_prompt_type = doc! { "_id": ObjectId::new(), "name": "Old", "provider": 1 };
        let string_provider =
            doc! { "_id": ObjectId::new(), "name": "Old", "provider": "google", "promptType": 1 };
        let unknown_provider =
            doc! { "_id": ObjectId::new(), "name": "Old", "provider": 9, "promptType": 1 };

        assert!(readable(missing_prompt_type).is_none());
        assert!(readable(string_provider).is_none());
        assert!(readable(unknown_provider).is_none());
        assert!(matches!(
            decode(doc! { "name": "No id", "provider": 1, "promptType": 1 }),
            Err(DomainError::Repository(_))
        ));
    }

    #[test]
    fn test_new_document_has_no_id() {
        let new = NewChatbot::new(
            "Support".to_string(),
            Provider::Google,
            PromptType::default(),
            Some("Answer briefly".to_string()),
        );
        let document = ChatbotDocument::from(&new);
        let bson = mongodb::bson::to_document(&document).unwrap();

        assert!(bson.get("_id").is_none());
        assert_eq!(bson.get_i32("promptType").unwrap(), 1);
        assert_eq!(bson.get_str("instructions").unwrap(), "Answer briefly");
        assert!(object_id("abc123").is_none());
    }
}
