//! Chatbot - request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use chatbots::{Chatbot, ChatbotPatch, NewChatbot, PromptType, Provider};

// ============================================
// Request/Response DTOs
// ============================================

/// Create Chatbot request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatbotRequest {
    pub name: String,
    /// 1 = Google, 2 = OpenAI
    #[schema(example = 1)]
    pub provider: i32,
    /// Defaults to 1
    #[serde(default)]
    pub prompt_type: Option<i32>,
    pub instructions: Option<String>,
}

/// Update Chatbot request; omitted fields keep their stored value
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChatbotRequest {
    pub name: Option<String>,
    pub provider: Option<i32>,
    pub prompt_type: Option<i32>,
    /// An empty string clears the instructions
    pub instructions: Option<String>,
}

/// Chatbot response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotResponse {
    pub id: String,
    pub name: String,
    pub provider: i32,
    pub provider_name: String,
    pub prompt_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Delete Chatbot response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteChatbotResponse {
    pub status: String,
    /// False when no chatbot had this id
    pub deleted: bool,
}

impl From<Chatbot> for ChatbotResponse {
    fn from(chatbot: Chatbot) -> Self {
        Self {
            id: chatbot.id,
            name: chatbot.name,
            provider: chatbot.provider.code(),
            provider_name: chatbot.provider.label().to_string(),
            prompt_type: chatbot.prompt_type.code(),
            instructions: chatbot.instructions,
        }
    }
}

impl TryFrom<CreateChatbotRequest> for NewChatbot {
    type Error = String;

    fn try_from(request: CreateChatbotRequest) -> Result<Self, Self::Error> {
        Ok(NewChatbot::new(
            request.name,
            Provider::try_from(request.provider)?,
            request.prompt_type.map(PromptType::new).unwrap_or_default(),
            request.instructions,
        ))
    }
}

impl TryFrom<UpdateChatbotRequest> for ChatbotPatch {
    type Error = String;

    fn try_from(request: UpdateChatbotRequest) -> Result<Self, Self::Error> {
        Ok(ChatbotPatch {
            name: request.name,
            provider: request.provider.map(Provider::try_from).transpose()?,
            prompt_type: request.prompt_type.map(PromptType::new),
            instructions: request.instructions,
        })
    }
}
