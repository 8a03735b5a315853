//! Chatbot - Configured assistant
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, PromptType, Provider};

/// Chatbot - A stored chatbot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chatbot {
    /// Assigned by the store on creation
    pub id: String,
    pub name: String,
    pub provider: Provider,
    pub prompt_type: PromptType,
    /// System prompt / behavioral instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Fields of a chatbot that does not exist yet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewChatbot {
    pub name: String,
    pub provider: Provider,
    pub prompt_type: PromptType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Partial update: only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_type: Option<PromptType>,
    /// `Some("")` clears the stored instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Absent and blank instructions are the same state; both become `None`.
pub fn normalize_instructions(instructions: Option<String>) -> Option<String> {
    instructions.filter(|s| !s.trim().is_empty())
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }
    Ok(())
}

impl Chatbot {
    /// Editable fields, without the id
    pub fn fields(&self) -> NewChatbot {
        NewChatbot {
            name: self.name.clone(),
            provider: self.provider,
            prompt_type: self.prompt_type,
            instructions: self.instructions.clone(),
        }
    }
}

impl NewChatbot {
    pub fn new(
        name: String,
        provider: Provider,
        prompt_type: PromptType,
        instructions: Option<String>,
    ) -> Self {
        Self {
            name,
            provider,
            prompt_type,
            instructions: normalize_instructions(instructions),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)
    }

    /// Attach the store-assigned id
    pub fn with_id(self, id: String) -> Chatbot {
        Chatbot {
            id,
            name: self.name,
            provider: self.provider,
            prompt_type: self.prompt_type,
            instructions: normalize_instructions(self.instructions),
        }
    }
}

impl ChatbotPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.provider.is_none()
            && self.prompt_type.is_none()
            && self.instructions.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Merge supplied fields into an existing chatbot
    pub fn apply_to(&self, chatbot: &mut Chatbot) {
        if let Some(name) = &self.name {
            chatbot.name = name.clone();
        }
        if let Some(provider) = self.provider {
            chatbot.provider = provider;
        }
        if let Some(prompt_type) = self.prompt_type {
            chatbot.prompt_type = prompt_type;
        }
        if let Some(instructions) = &self.instructions {
            chatbot.instructions = normalize_instructions(Some(instructions.clone()));
        }
    }
}

impl From<&Chatbot> for ChatbotPatch {
    fn from(chatbot: &Chatbot) -> Self {
        Self {
            name: Some(chatbot.name.clone()),
            provider: Some(chatbot.provider),
            prompt_type: Some(chatbot.prompt_type),
            instructions: Some(chatbot.instructions.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn support_bot() -> Chatbot {
        Chatbot {
            id: "abc123".to_string(),
            name: "Support".to_string(),
            provider: Provider::Google,
            prompt_type: PromptType::new(1),
            instructions: Some("Be kind".to_string()),
        }
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let mut bot = support_bot();
        let patch = ChatbotPatch {
            name: Some("Support v2".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut bot);

        assert_eq!(bot.name, "Support v2");
        assert_eq!(bot.provider, Provider::Google);
        assert_eq!(bot.prompt_type, PromptType::new(1));
        assert_eq!(bot.instructions.as_deref(), Some("Be kind"));
    }

    #[test]
    fn test_blank_instructions_clear() {
        let mut bot = support_bot();
        let patch = ChatbotPatch {
            instructions: Some("  ".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut bot);
        assert_eq!(bot.instructions, None);
    }

    #[test]
    fn test_name_required() {
        let new = NewChatbot::new(" ".to_string(), Provider::OpenAI, PromptType::default(), None);
        assert!(matches!(new.validate(), Err(DomainError::Validation(_))));

        let patch = ChatbotPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(ChatbotPatch::default().validate().is_ok());
    }

    #[test]
    fn test_full_patch_round_trips_draft() {
        let source = support_bot();
        let mut target = Chatbot {
            id: "other".to_string(),
            ..Default::default()
        };
        ChatbotPatch::from(&source).apply_to(&mut target);

        assert_eq!(target.fields(), source.fields());
        assert_eq!(target.id, "other");
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(support_bot()).unwrap();
        assert_eq!(value["promptType"], 1);
        assert_eq!(value["provider"], 1);

        let mut bot = support_bot();
        bot.instructions = None;
        let value = serde_json::to_value(bot).unwrap();
        assert!(value.get("instructions").is_none());
    }
}
