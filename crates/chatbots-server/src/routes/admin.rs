//! Admin settings page for chatbots
//!
//! Server-rendered table and dialog over the generic scaffold. Every request
//! builds its own scaffold; the dialog state travels in the query string
//! and the submitted form.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use chatbots::{Chatbot, ChatbotRepository, DomainError, PageCache, CHATBOTS_ADMIN_PATH};

use crate::admin::{
    chatbot_crud, default_chatbot, ChatbotCrud, ChatbotDialogView, ChatbotFormInput,
    ChatbotsPageView, CrudEvent, ErrorPageView, Notice, SubmitOutcome, ENTITY_NAME,
};
use crate::AppState;

const PAGE_TITLE: &str = "Chatbots";

type PageCrud = ChatbotCrud<dyn ChatbotRepository>;

/// Failures that prevent any page from being produced
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Query parameters of the settings page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `create` or `edit`
    pub dialog: Option<String>,
    /// Record to edit
    pub id: Option<String>,
    /// Event from a previous write, shown as a notice
    pub notice: Option<String>,
}

impl PageQuery {
    /// The bare listing, which is the only cacheable rendering
    fn is_plain(&self) -> bool {
        self.dialog.is_none() && self.id.is_none() && self.notice.is_none()
    }
}

fn render(
    state: &AppState,
    crud: &PageCrud,
    notice: Option<Notice>,
    listing_unavailable: bool,
) -> Result<String, PageError> {
    let table = crud.table();
    let view = ChatbotsPageView {
        title: PAGE_TITLE,
        admin_path: CHATBOTS_ADMIN_PATH,
        notice,
        listing_unavailable,
        colspan: table.headers.len() + 1,
        table,
        dialog: ChatbotDialogView::new(crud.form(), state.prompt_types.as_ref()),
    };
    Ok(state.templates.render_page(&view)?)
}

/// Listing failed: show the reason and a way to retry, never an empty table
fn unavailable(state: &AppState) -> Result<Response, PageError> {
    let html = state.templates.render_error(&ErrorPageView {
        title: PAGE_TITLE,
        message: "Could not load chatbots. Please try again.".to_string(),
        retry_href: CHATBOTS_ADMIN_PATH,
    })?;
    Ok((StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response())
}

fn failure_status(e: &DomainError) -> StatusCode {
    match e {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redirect_with(event: CrudEvent) -> Response {
    Redirect::to(&format!("{}?notice={}", CHATBOTS_ADMIN_PATH, event)).into_response()
}

async fn load(state: &AppState) -> Result<PageCrud, DomainError> {
    let rows = state.chatbot_service.list().await?;
    Ok(chatbot_crud(state.chatbot_service.clone(), rows))
}

/// Chatbot settings page
pub async fn chatbots_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    let plain = query.is_plain();
    if plain {
        if let Some(html) = state.page_cache.get(CHATBOTS_ADMIN_PATH) {
            return Ok(Html(html).into_response());
        }
    }

    let generation = state.page_cache.generation();
    let Ok(mut crud) = load(&state).await else {
        return unavailable(&state);
    };

    let mut notice = query
        .notice
        .as_deref()
        .and_then(|n| n.parse::<CrudEvent>().ok())
        .map(|event| event.notice(ENTITY_NAME));

    match (query.dialog.as_deref(), query.id.as_deref()) {
        (Some("create"), _) => crud.add(),
        (Some("edit"), Some(id)) => {
            if !crud.edit(id) {
                notice = Some(Notice::error(format!("{} {} not found", ENTITY_NAME, id)));
            }
        }
        _ => {}
    }

    let html = render(&state, &crud, notice, false)?;
    if plain {
        state
            .page_cache
            .put(CHATBOTS_ADMIN_PATH, html.clone(), generation);
    }

    Ok(Html(html).into_response())
}

/// Create or edit submission from the dialog.
/// Saving needs no listing; the table is only read when the dialog has to
/// be shown again.
pub async fn submit_chatbot(
    State(state): State<AppState>,
    Form(input): Form<ChatbotFormInput>,
) -> Result<Response, PageError> {
    let mut crud = chatbot_crud(state.chatbot_service.clone(), Vec::new());
    match input.edit_id() {
        Some(id) => crud.edit_record(&Chatbot {
            id: id.to_string(),
            ..default_chatbot()
        }),
        None => crud.add(),
    }

    let applied = input.apply(&mut crud.form_mut().data);
    let failure = match applied {
        Err(e) => e,
        Ok(()) => match crud.submit().await {
            SubmitOutcome::Saved { event, .. } => return Ok(redirect_with(event)),
            SubmitOutcome::Failed(e) => e,
            SubmitOutcome::Ignored => return Ok(Redirect::to(CHATBOTS_ADMIN_PATH).into_response()),
        },
    };

    let listing_unavailable = match state.chatbot_service.list().await {
        Ok(rows) => {
            crud.replace_rows(rows);
            false
        }
        Err(_) => true,
    };
    let notice = CrudEvent::Failed.notice(ENTITY_NAME);
    let html = render(&state, &crud, Some(notice), listing_unavailable)?;
    Ok((failure_status(&failure), Html(html)).into_response())
}

/// Delete trigger from a table row
pub async fn delete_chatbot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let Ok(mut crud) = load(&state).await else {
        return unavailable(&state);
    };

    let event = match crud.delete(&id).await {
        Ok(_) => CrudEvent::Deleted,
        Err(_) => CrudEvent::Failed,
    };
    Ok(redirect_with(event))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(CHATBOTS_ADMIN_PATH, get(chatbots_page).post(submit_chatbot))
        .route(
            &format!("{}/:id/delete", CHATBOTS_ADMIN_PATH),
            post(delete_chatbot),
        )
}
