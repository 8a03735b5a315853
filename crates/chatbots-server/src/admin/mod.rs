//! Chatbot settings admin page
//!
//! - `crud`: generic table + form scaffold
//! - `form`: chatbot fields, dialog and callbacks
//! - `prompt_type`: prompt type selector capability
//! - `templates`: handlebars rendering

pub mod crud;
pub mod form;
pub mod prompt_type;
pub mod templates;

pub use crud::{CrudEvent, Notice, SubmitOutcome};
pub use form::{
    chatbot_crud, default_chatbot, ChatbotCrud, ChatbotDialogView, ChatbotFormInput, ENTITY_NAME,
};
pub use prompt_type::{NumberedPromptTypes, PromptTypeInput};
pub use templates::{AdminTemplates, ChatbotsPageView, ErrorPageView};
