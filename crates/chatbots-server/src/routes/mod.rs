//! Chatbots Routes
//!
//! - /admin/settings/chatbots - Admin settings page (HTML)
//! - /api/chatbots - Chatbot records (JSON)
//! - /swagger-ui - API documentation
//! - /health - Health check

pub mod admin;
pub mod chatbot;
pub mod swagger;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chatbots::DomainError;

use crate::AppState;

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Chatbot settings are being served".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Map a domain failure onto the JSON API's status codes
pub fn domain_error(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// The complete application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(admin::router())
        .merge(chatbot::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use chatbots::ChatbotRepository;

    use crate::adapters::InMemoryChatbotRepository;
    use crate::config::ServerConfig;
    use crate::AppState;

    pub(crate) fn state_with(repo: Arc<dyn ChatbotRepository>) -> AppState {
        AppState::new(repo, &ServerConfig::default()).unwrap()
    }

    pub(crate) fn memory_state() -> AppState {
        state_with(Arc::new(InMemoryChatbotRepository::new()))
    }

    /// Send one request and collect status, `Location` header and body
    pub(crate) async fn send(
        router: Router,
        request: Request<Body>,
    ) -> (StatusCode, Option<String>, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
