//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ChatbotResponse, CreateChatbotRequest, DeleteChatbotResponse, UpdateChatbotRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chatbot::list_chatbots,
        super::chatbot::create_chatbot,
        super::chatbot::get_chatbot,
        super::chatbot::update_chatbot,
        super::chatbot::delete_chatbot,
    ),
    info(
        title = "Chatbots API",
        version = "0.1.0",
        description = "Chatbot configuration records.\n\nProvider codes: 1 = Google, 2 = OpenAI.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Chatbot", description = "Chatbot configuration records"),
    ),
    components(
        schemas(
            CreateChatbotRequest,
            UpdateChatbotRequest,
            ChatbotResponse,
            DeleteChatbotResponse,
        )
    ),
)]
pub struct ApiDoc;
