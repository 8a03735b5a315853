//! Chatbot Routes - JSON access to chatbot records
//!
//! HTTP handlers that delegate to ChatbotService.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use chatbots::{ChatbotPatch, NewChatbot};

use super::domain_error;
use crate::models::{
    ChatbotResponse, CreateChatbotRequest, DeleteChatbotResponse, UpdateChatbotRequest,
};
use crate::AppState;

/// List all Chatbots
#[utoipa::path(
    get,
    path = "/api/chatbots",
    responses(
        (status = 200, description = "List of all Chatbots", body = Vec<ChatbotResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chatbot"
)]
pub async fn list_chatbots(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatbotResponse>>, (axum::http::StatusCode, String)> {
    let chatbots = state.chatbot_service.list().await.map_err(domain_error)?;

    Ok(Json(chatbots.into_iter().map(ChatbotResponse::from).collect()))
}

/// Create new Chatbot
#[utoipa::path(
    post,
    path = "/api/chatbots",
    request_body = CreateChatbotRequest,
    responses(
        (status = 200, description = "Chatbot created successfully", body = ChatbotResponse),
        (status = 400, description = "Missing name or unknown provider"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chatbot"
)]
pub async fn create_chatbot(
    State(state): State<AppState>,
    Json(payload): Json<CreateChatbotRequest>,
) -> Result<Json<ChatbotResponse>, (axum::http::StatusCode, String)> {
    let chatbot = NewChatbot::try_from(payload)
        .map_err(|e| (axum::http::StatusCode::BAD_REQUEST, e))?;

    let created = state
        .chatbot_service
        .create(chatbot)
        .await
        .map_err(domain_error)?;

    Ok(Json(created.into()))
}

/// Get Chatbot by ID
#[utoipa::path(
    get,
    path = "/api/chatbots/{id}",
    params(
        ("id" = String, Path, description = "Chatbot ID")
    ),
    responses(
        (status = 200, description = "Chatbot found", body = ChatbotResponse),
        (status = 404, description = "Chatbot not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chatbot"
)]
pub async fn get_chatbot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChatbotResponse>, (axum::http::StatusCode, String)> {
    let chatbot = state
        .chatbot_service
        .get(&id)
        .await
        .map_err(domain_error)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Chatbot not found".to_string(),
        ))?;

    Ok(Json(chatbot.into()))
}

/// Update Chatbot; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/chatbots/{id}",
    params(
        ("id" = String, Path, description = "Chatbot ID")
    ),
    request_body = UpdateChatbotRequest,
    responses(
        (status = 200, description = "Chatbot updated successfully", body = ChatbotResponse),
        (status = 400, description = "Blank name or unknown provider"),
        (status = 404, description = "Chatbot not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chatbot"
)]
pub async fn update_chatbot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateChatbotRequest>,
) -> Result<Json<ChatbotResponse>, (axum::http::StatusCode, String)> {
    let patch = ChatbotPatch::try_from(payload)
        .map_err(|e| (axum::http::StatusCode::BAD_REQUEST, e))?;

    let updated = state
        .chatbot_service
        .update(&id, patch)
        .await
        .map_err(domain_error)?;

    Ok(Json(updated.into()))
}

/// Delete Chatbot
#[utoipa::path(
    delete,
    path = "/api/chatbots/{id}",
    params(
        ("id" = String, Path, description = "Chatbot ID")
    ),
    responses(
        (status = 200, description = "Chatbot deleted, or already absent", body = DeleteChatbotResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chatbot"
)]
pub async fn delete_chatbot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteChatbotResponse>, (axum::http::StatusCode, String)> {
    let deleted = state
        .chatbot_service
        .delete(&id)
        .await
        .map_err(domain_error)?;

    Ok(Json(DeleteChatbotResponse {
        status: "ok".to_string(),
        deleted,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chatbots", get(list_chatbots).post(create_chatbot))
        .route(
            "/api/chatbots/:id",
            get(get_chatbot).put(update_chatbot).delete(delete_chatbot),
        )
}
