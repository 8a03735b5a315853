//! Generic CRUD scaffold
//!
//! Renders a table of entities and owns the shared create/edit form state.
//! Persistence is delegated to injected callbacks; the scaffold knows
//! nothing about what the entities mean.

use async_trait::async_trait;
use serde::Serialize;

use chatbots::DomainError;

/// An entity the scaffold can list and edit
pub trait CrudEntity: Clone + Send + Sync + 'static {
    /// Stable row key
    fn key(&self) -> &str;

    /// How each field is shown in a table row
    fn columns() -> Vec<Column<Self>>;
}

/// One table column
pub struct Column<E> {
    pub header: &'static str,
    pub cell: fn(&E) -> String,
}

/// Persistence hooks supplied by the page
#[async_trait]
pub trait CrudCallbacks<E>: Send + Sync {
    async fn on_create(&self, data: &E) -> Result<E, DomainError>;
    async fn on_edit(&self, data: &E) -> Result<E, DomainError>;
    async fn on_delete(&self, data: &E) -> Result<bool, DomainError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudMethod {
    Create,
    Edit,
}

/// Shared form state: which record is being edited and its draft
#[derive(Debug, Clone, PartialEq)]
pub struct CrudForm<E> {
    pub method: CrudMethod,
    pub data: E,
    pub open: bool,
    busy: bool,
}

impl<E: Clone> CrudForm<E> {
    pub fn new(default: E) -> Self {
        Self {
            method: CrudMethod::Create,
            data: default,
            open: false,
            busy: false,
        }
    }

    /// Open for a new record. The draft is replaced, never merged.
    pub fn open_create(&mut self, default: &E) {
        *self = Self {
            method: CrudMethod::Create,
            data: default.clone(),
            open: true,
            busy: false,
        };
    }

    /// Open for an existing record. The draft is replaced, never merged.
    pub fn open_edit(&mut self, row: &E) {
        *self = Self {
            method: CrudMethod::Edit,
            data: row.clone(),
            open: true,
            busy: false,
        };
    }

    pub fn close(&mut self, default: &E) {
        *self = Self::new(default.clone());
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Enter the busy state and hand out what to persist.
    /// `None` when closed or a submission is already in flight.
    pub(crate) fn begin_submit(&mut self) -> Option<(CrudMethod, E)> {
        if !self.open || self.busy {
            return None;
        }
        self.busy = true;
        Some((self.method, self.data.clone()))
    }

    pub(crate) fn finish_submit(&mut self) {
        self.busy = false;
    }
}

/// What happened, for the user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudEvent {
    Added,
    Updated,
    Deleted,
    Failed,
}

impl CrudEvent {
    pub fn notice(self, entity_name: &str) -> Notice {
        match self {
            CrudEvent::Added => Notice::success(format!("{} added successfully", entity_name)),
            CrudEvent::Updated => Notice::success(format!("{} updated successfully", entity_name)),
            CrudEvent::Deleted => Notice::success(format!("{} deleted successfully", entity_name)),
            CrudEvent::Failed => Notice::error("Something went wrong"),
        }
    }
}

impl std::fmt::Display for CrudEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrudEvent::Added => write!(f, "added"),
            CrudEvent::Updated => write!(f, "updated"),
            CrudEvent::Deleted => write!(f, "deleted"),
            CrudEvent::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for CrudEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(CrudEvent::Added),
            "updated" => Ok(CrudEvent::Updated),
            "deleted" => Ok(CrudEvent::Deleted),
            "failed" => Ok(CrudEvent::Failed),
            _ => Err(format!("Unknown event: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Result of submitting the form
#[derive(Debug)]
pub enum SubmitOutcome<E> {
    Saved { event: CrudEvent, entity: E },
    Failed(DomainError),
    /// Form closed or already submitting; nothing was sent
    Ignored,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrudRowView {
    pub key: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrudTableView {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<CrudRowView>,
}

/// Table plus form, parameterized by entity and persistence callbacks
pub struct Crud<E: CrudEntity, C: CrudCallbacks<E>> {
    name: &'static str,
    columns: Vec<Column<E>>,
    rows: Vec<E>,
    default_data: E,
    form: CrudForm<E>,
    callbacks: C,
}

impl<E: CrudEntity, C: CrudCallbacks<E>> Crud<E, C> {
    pub fn new(name: &'static str, rows: Vec<E>, default_data: E, callbacks: C) -> Self {
        Self {
            name,
            columns: E::columns(),
            rows,
            form: CrudForm::new(default_data.clone()),
            default_data,
            callbacks,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn form(&self) -> &CrudForm<E> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CrudForm<E> {
        &mut self.form
    }

    /// "Add" trigger
    pub fn add(&mut self) {
        self.form.open_create(&self.default_data);
    }

    /// "Edit" trigger for a row. Returns false when no row has this key.
    pub fn edit(&mut self, key: &str) -> bool {
        match self.rows.iter().find(|row| row.key() == key) {
            Some(row) => {
                self.form.open_edit(row);
                true
            }
            None => false,
        }
    }

    /// "Edit" trigger for a record taken from elsewhere than the listing
    pub fn edit_record(&mut self, record: &E) {
        self.form.open_edit(record);
    }

    pub fn close(&mut self) {
        self.form.close(&self.default_data);
    }

    /// Swap in a fresh listing snapshot; the form is left as is
    pub fn replace_rows(&mut self, rows: Vec<E>) {
        self.rows = rows;
    }

    /// "Delete" trigger: goes straight to the callback, no form involved.
    /// A key that is not listed counts as already deleted.
    pub async fn delete(&mut self, key: &str) -> Result<bool, DomainError> {
        let Some(index) = self.rows.iter().position(|row| row.key() == key) else {
            return Ok(false);
        };

        let deleted = self.callbacks.on_delete(&self.rows[index]).await?;
        self.rows.remove(index);
        Ok(deleted)
    }

    /// Persist the draft through the create or edit callback.
    /// On success the form closes and resets; on failure it stays open.
    pub async fn submit(&mut self) -> SubmitOutcome<E> {
        let Some((method, data)) = self.form.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let result = match method {
            CrudMethod::Create => self.callbacks.on_create(&data).await,
            CrudMethod::Edit => self.callbacks.on_edit(&data).await,
        };
        self.form.finish_submit();

        match result {
            Ok(saved) => {
                let event = match method {
                    CrudMethod::Create => CrudEvent::Added,
                    CrudMethod::Edit => CrudEvent::Updated,
                };
                match self.rows.iter_mut().find(|row| row.key() == saved.key()) {
                    Some(row) => *row = saved.clone(),
                    None => self.rows.push(saved.clone()),
                }
                self.close();
                SubmitOutcome::Saved {
                    event,
                    entity: saved,
                }
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    pub fn table(&self) -> CrudTableView {
        CrudTableView {
            name: self.name.to_string(),
            headers: self.columns.iter().map(|c| c.header).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| CrudRowView {
                    key: row.key().to_string(),
                    cells: self.columns.iter().map(|c| (c.cell)(row)).collect(),
                })
                .collect(),
        }
    }
}
