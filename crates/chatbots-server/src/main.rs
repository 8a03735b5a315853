use std::sync::Arc;

use anyhow::Context;

mod adapters;
mod admin;
mod application;
mod config;
mod models;
mod routes;

use adapters::{InMemoryChatbotRepository, MongoChatbotRepository, RenderCache};
use admin::{AdminTemplates, NumberedPromptTypes, PromptTypeInput};
use application::ChatbotService;
use chatbots::{ChatbotRepository, PageCache};
use config::ServerConfig;

/// Chatbot service over whichever store was configured
pub type AppChatbotService = ChatbotService<dyn ChatbotRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chatbot_service: Arc<AppChatbotService>,
    pub page_cache: Arc<dyn PageCache>,
    pub templates: Arc<AdminTemplates>,
    pub prompt_types: Arc<dyn PromptTypeInput>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ChatbotRepository>, config: &ServerConfig) -> anyhow::Result<Self> {
        let page_cache: Arc<dyn PageCache> = if config.page_cache_enabled {
            Arc::new(RenderCache::new())
        } else {
            tracing::warn!("⚠️  ADMIN_PAGE_CACHE off - admin page rendered on every request");
            Arc::new(RenderCache::disabled())
        };

        let templates = AdminTemplates::new().context("Failed to compile admin templates")?;

        Ok(Self {
            chatbot_service: Arc::new(ChatbotService::new(repo, page_cache.clone())),
            page_cache,
            templates: Arc::new(templates),
            prompt_types: Arc::new(NumberedPromptTypes::new(config.prompt_type_count)),
        })
    }
}

async fn chatbot_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn ChatbotRepository>> {
    match &config.mongodb_uri {
        Some(uri) => {
            let db = adapters::mongo::connect(uri, &config.mongodb_database)
                .await
                .context("Failed to connect to MongoDB")?;
            tracing::info!("🍃 MongoDB connected (database: {})", config.mongodb_database);
            Ok(Arc::new(MongoChatbotRepository::new(&db)))
        }
        None => {
            tracing::warn!("⚠️  No MONGODB_URI set - chatbots kept in memory only");
            Ok(Arc::new(InMemoryChatbotRepository::new()))
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🤖 Chatbots server initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));
    let repo = chatbot_repository(&config).await?;
    let state = AppState::new(repo, &config)?;

    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Chatbots server ready - {}", chatbots::CHATBOTS_ADMIN_PATH);

    Ok(router.into())
}
