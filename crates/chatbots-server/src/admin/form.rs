//! Chatbot form
//!
//! Binds the generic scaffold to chatbots: default draft, table columns,
//! field decoding from the submitted HTML form, the dialog view model and
//! the callbacks that reach the store.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use chatbots::{
    normalize_instructions, Chatbot, ChatbotPatch, ChatbotRepository, DomainError, PromptType,
    Provider,
};

use super::crud::{Column, Crud, CrudCallbacks, CrudEntity, CrudForm, CrudMethod};
use super::prompt_type::{PromptTypeInput, PromptTypeOption};
use crate::application::ChatbotService;

pub const ENTITY_NAME: &str = "Chatbot";

const INSTRUCTIONS_PREVIEW_CHARS: usize = 60;

/// Draft used when creating: empty name, first provider, first prompt type
pub fn default_chatbot() -> Chatbot {
    Chatbot {
        id: String::new(),
        name: String::new(),
        provider: Provider::default(),
        prompt_type: PromptType::default(),
        instructions: None,
    }
}

fn instructions_preview(chatbot: &Chatbot) -> String {
    let text = chatbot.instructions.as_deref().unwrap_or_default();
    if text.chars().count() <= INSTRUCTIONS_PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(INSTRUCTIONS_PREVIEW_CHARS).collect();
    format!("{}…", head.trim_end())
}

impl CrudEntity for Chatbot {
    fn key(&self) -> &str {
        &self.id
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column {
                header: "Name",
                cell: |c| c.name.clone(),
            },
            Column {
                header: "Provider",
                cell: |c| c.provider.label().to_string(),
            },
            Column {
                header: "Type",
                cell: |c| c.prompt_type.to_string(),
            },
            Column {
                header: "Instructions",
                cell: instructions_preview,
            },
        ]
    }
}

/// Fields posted by the chatbot dialog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatbotFormInput {
    /// Present when editing an existing record
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, rename = "promptType")]
    pub prompt_type: String,
    #[serde(default)]
    pub instructions: String,
}

impl ChatbotFormInput {
    pub fn edit_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Overwrite every editable field of the draft.
    /// Fields that fail to decode keep their previous value.
    pub fn apply(&self, draft: &mut Chatbot) -> Result<(), DomainError> {
        draft.name = self.name.clone();
        draft.instructions = normalize_instructions(Some(self.instructions.clone()));

        let mut problem = None;

        if self.provider.trim().is_empty() {
            problem = Some("Provider is required".to_string());
        } else {
            match self.provider.parse::<Provider>() {
                Ok(provider) => draft.provider = provider,
                Err(e) => problem = Some(e),
            }
        }

        match self.prompt_type.trim().parse::<i32>() {
            Ok(code) => draft.prompt_type = PromptType::new(code),
            Err(_) => {
                problem.get_or_insert_with(|| format!("Invalid prompt type: {}", self.prompt_type));
            }
        }

        match problem {
            Some(message) => Err(DomainError::Validation(message)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderOption {
    pub value: i32,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the dialog template needs
#[derive(Debug, Clone, Serialize)]
pub struct ChatbotDialogView {
    pub open: bool,
    pub method: CrudMethod,
    pub title: &'static str,
    pub description: &'static str,
    pub id: String,
    pub name: String,
    pub providers: Vec<ProviderOption>,
    pub prompt_types: Vec<PromptTypeOption>,
    pub instructions: String,
    pub busy: bool,
    pub submit_label: &'static str,
}

impl ChatbotDialogView {
    pub fn new(form: &CrudForm<Chatbot>, prompt_types: &dyn PromptTypeInput) -> Self {
        let draft = &form.data;
        let (title, description) = match form.method {
            CrudMethod::Create => ("Add Chatbot", "Add a new chatbot to the system."),
            CrudMethod::Edit => ("Edit Chatbot", "Make changes to the chatbot here."),
        };

        Self {
            open: form.open,
            method: form.method,
            title,
            description,
            id: match form.method {
                CrudMethod::Create => String::new(),
                CrudMethod::Edit => draft.id.clone(),
            },
            name: draft.name.clone(),
            providers: Provider::ALL
                .iter()
                .map(|p| ProviderOption {
                    value: p.code(),
                    label: p.label(),
                    selected: *p == draft.provider,
                })
                .collect(),
            prompt_types: prompt_types.options(draft.prompt_type),
            instructions: draft.instructions.clone().unwrap_or_default(),
            busy: form.is_busy(),
            submit_label: if form.is_busy() {
                "Saving..."
            } else {
                "Save changes"
            },
        }
    }
}

/// Callbacks that send scaffold actions to the chatbot service
pub struct ChatbotCallbacks<R: ChatbotRepository + ?Sized> {
    service: Arc<ChatbotService<R>>,
}

impl<R: ChatbotRepository + ?Sized> ChatbotCallbacks<R> {
    pub fn new(service: Arc<ChatbotService<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: ChatbotRepository + ?Sized + 'static> CrudCallbacks<Chatbot> for ChatbotCallbacks<R> {
    async fn on_create(&self, data: &Chatbot) -> Result<Chatbot, DomainError> {
        self.service.create(data.fields()).await
    }

    async fn on_edit(&self, data: &Chatbot) -> Result<Chatbot, DomainError> {
        self.service.update(&data.id, ChatbotPatch::from(data)).await
    }

    async fn on_delete(&self, data: &Chatbot) -> Result<bool, DomainError> {
        self.service.delete(&data.id).await
    }
}

/// The chatbot table and form over a listing snapshot
pub type ChatbotCrud<R> = Crud<Chatbot, ChatbotCallbacks<R>>;

pub fn chatbot_crud<R: ChatbotRepository + ?Sized + 'static>(
    service: Arc<ChatbotService<R>>,
    rows: Vec<Chatbot>,
) -> ChatbotCrud<R> {
    Crud::new(
        ENTITY_NAME,
        rows,
        default_chatbot(),
        ChatbotCallbacks::new(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryChatbotRepository, RenderCache};
    use crate::admin::crud::SubmitOutcome;
    use crate::admin::prompt_type::NumberedPromptTypes;
    use crate::application::FailingRepository;

    fn input(name: &str, provider: &str, prompt_type: &str, instructions: &str) -> ChatbotFormInput {
        ChatbotFormInput {
            id: None,
            name: name.to_string(),
            provider: provider.to_string(),
            prompt_type: prompt_type.to_string(),
            instructions: instructions.to_string(),
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = default_chatbot();
        assert_eq!(draft.name, "");
        assert_eq!(draft.provider.code(), 1);
        assert_eq!(draft.prompt_type.code(), 1);
        assert_eq!(draft.instructions, None);
    }

    #[test]
    fn test_apply_overwrites_fields() {
        let mut draft = default_chatbot();
        input("Sales", "2", "3", "Close deals").apply(&mut draft).unwrap();

        assert_eq!(draft.name, "Sales");
        assert_eq!(draft.provider, Provider::OpenAI);
        assert_eq!(draft.prompt_type, PromptType::new(3));
        assert_eq!(draft.instructions.as_deref(), Some("Close deals"));

        input("Sales", "1", "3", "").apply(&mut draft).unwrap();
        assert_eq!(draft.instructions, None);
    }

    #[test]
    fn test_apply_rejects_unknown_provider() {
        let mut draft = default_chatbot();
        let err = input("Sales", "9", "1", "").apply(&mut draft).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(draft.provider, Provider::Google);
        assert_eq!(draft.name, "Sales");

        assert!(input("Sales", "", "1", "").apply(&mut draft).is_err());
        assert!(input("Sales", "1", "x", "").apply(&mut draft).is_err());
    }

    #[test]
    fn test_edit_id_ignores_blank() {
        let mut form = input("a", "1", "1", "");
        assert_eq!(form.edit_id(), None);
        form.id = Some("  ".to_string());
        assert_eq!(form.edit_id(), None);
        form.id = Some("abc123".to_string());
        assert_eq!(form.edit_id(), Some("abc123"));
    }

    #[test]
    fn test_dialog_view_labels() {
        let mut form = CrudForm::new(default_chatbot());
        let types = NumberedPromptTypes::new(2);

        form.open_create(&default_chatbot());
        let view = ChatbotDialogView::new(&form, &types);
        assert_eq!(view.title, "Add Chatbot");
        assert_eq!(view.submit_label, "Save changes");
        assert!(view.providers[0].selected);
        assert_eq!(view.id, "");

        let existing = Chatbot {
            id: "abc123".to_string(),
            name: "Support".to_string(),
            provider: Provider::OpenAI,
            prompt_type: PromptType::new(2),
            instructions: None,
        };
        form.open_edit(&existing);
        assert!(form.begin_submit().is_some());
        let view = ChatbotDialogView::new(&form, &types);
        assert_eq!(view.title, "Edit Chatbot");
        assert_eq!(view.description, "Make changes to the chatbot here.");
        assert_eq!(view.submit_label, "Saving...");
        assert!(view.busy);
        assert_eq!(view.id, "abc123");
        assert!(view.providers[1].selected);
    }

    #[test]
    fn test_long_instructions_truncated_in_table() {
        let chatbot = Chatbot {
            instructions: Some("x".repeat(100)),
            ..default_chatbot()
        };
        let preview = instructions_preview(&chatbot);
        assert_eq!(preview.chars().count(), INSTRUCTIONS_PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }

    #[tokio::test]
    async fn test_edit_submit_updates_store() {
        let repo = Arc::new(InMemoryChatbotRepository::with_id_source(|| "abc123".to_string()));
        let service = Arc::new(ChatbotService::new(repo, Arc::new(RenderCache::new())));
        let created = service
            .create(chatbots::NewChatbot::new(
                "Support".to_string(),
                Provider::Google,
                PromptType::default(),
                None,
            ))
            .await
            .unwrap();

        let mut crud = chatbot_crud(service.clone(), vec![created]);
        assert!(crud.edit("abc123"));
        input("Support v2", "1", "1", "")
            .apply(&mut crud.form_mut().data)
            .unwrap();

        assert!(matches!(
            crud.submit().await,
            SubmitOutcome::Saved { .. }
        ));
        let stored = service.get("abc123").await.unwrap().unwrap();
        assert_eq!(stored.name, "Support v2");
        assert_eq!(stored.provider, Provider::Google);
    }

    #[tokio::test]
    async fn test_store_failure_leaves_dialog_open() {
        let service = Arc::new(ChatbotService::new(
            Arc::new(FailingRepository),
            Arc::new(RenderCache::new()),
        ));
        let existing = Chatbot {
            id: "abc123".to_string(),
            name: "Support".to_string(),
            ..default_chatbot()
        };
        let mut crud = chatbot_crud(service, vec![existing]);
        assert!(crud.edit("abc123"));
        crud.form_mut().data.name = "Support v2".to_string();

        assert!(matches!(crud.submit().await, SubmitOutcome::Failed(_)));
        assert!(crud.form().open);
        assert_eq!(crud.form().data.name, "Support v2");
    }
}
