//! Item Editor
//!
//! View/edit state machine for one to-do row.
//!
//! ```text
//! Viewing --begin_edit--> Editing
//! Editing --begin_edit--> Editing   (draft reset)
//! Editing --confirm_edit--> Viewing (change_status(draft))
//! Editing --cancel_edit--> Viewing
//! ```
//!
//! `request_remove` is valid in both states and never transitions.

use tracing::debug;

use crate::error::{TodoError, TodoResult};
use crate::models::{Importance, Status, TaskRecord};

/// Mutations owned by the list that holds the records
pub trait ItemActions {
    /// Replace the stored record with `record` (same id)
    fn change_status(&self, record: TaskRecord);

    /// Remove the record with `id`
    fn remove_todo(&self, id: u32);
}

/// One field replacement on a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Task(String),
    Status(Status),
    Importance(Importance),
}

impl DraftField {
    /// Build a field update from a form field name and its raw value
    pub fn parse(name: &str, value: &str) -> TodoResult<Self> {
        match name {
            "task" => Ok(DraftField::Task(value.to_string())),
            "status" => Ok(DraftField::Status(value.parse()?)),
            "importance" => Ok(DraftField::Importance(value.parse()?)),
            other => Err(TodoError::InvalidEnumValue { kind: "field", value: other.to_string() }),
        }
    }
}

/// Working copy of a record, alive for one edit session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft(TaskRecord);

impl Draft {
    pub fn from_record(record: &TaskRecord) -> Self {
        Draft(record.clone())
    }

    /// Returns a new draft with one field replaced
    #[must_use]
    pub fn with_field(&self, field: DraftField) -> Self {
        let mut record = self.0.clone();
        match field {
            DraftField::Task(task) => record.task = task,
            DraftField::Status(status) => record.status = status,
            DraftField::Importance(importance) => record.importance = importance,
        }
        Draft(record)
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    pub fn task(&self) -> &str {
        &self.0.task
    }

    pub fn status(&self) -> Status {
        self.0.status
    }

    pub fn importance(&self) -> Importance {
        self.0.importance
    }

    pub fn as_record(&self) -> &TaskRecord {
        &self.0
    }

    pub fn into_record(self) -> TaskRecord {
        self.0
    }
}

/// Current mode of a row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing(Draft),
}

/// View/edit controller state for one row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemEditor {
    mode: EditMode,
}

impl ItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            EditMode::Editing(draft) => Some(draft),
            EditMode::Viewing => None,
        }
    }

    /// Enter edit mode with a fresh draft of `record`, dropping any stale draft
    pub fn begin_edit(&mut self, record: &TaskRecord) {
        debug!(id = record.id, "begin edit");
        self.mode = EditMode::Editing(Draft::from_record(record));
    }

    pub fn update_draft_field(&mut self, field: DraftField) -> TodoResult<()> {
        let draft = self.draft_for("update draft")?;
        self.mode = EditMode::Editing(draft.with_field(field));
        Ok(())
    }

    /// String boundary for form inputs: `name` is `task`, `status` or `importance`
    pub fn update_draft_field_raw(&mut self, name: &str, value: &str) -> TodoResult<()> {
        // Mode is checked before parsing so NotEditing wins over a bad value
        self.draft_for("update draft")?;
        self.update_draft_field(DraftField::parse(name, value)?)
    }

    pub fn set_draft_status(&mut self, status: Status) -> TodoResult<()> {
        self.update_draft_field(DraftField::Status(status))
    }

    /// Leave edit mode and hand the whole draft to `change_status`
    pub fn confirm_edit(&mut self, actions: &impl ItemActions) -> TodoResult<()> {
        match std::mem::take(&mut self.mode) {
            EditMode::Editing(draft) => {
                debug!(id = draft.id(), "confirm edit");
                actions.change_status(draft.into_record());
                Ok(())
            }
            EditMode::Viewing => Err(TodoError::NotEditing { operation: "confirm edit" }),
        }
    }

    /// Leave edit mode without touching the stored record
    pub fn cancel_edit(&mut self) -> TodoResult<()> {
        match std::mem::take(&mut self.mode) {
            EditMode::Editing(draft) => {
                debug!(id = draft.id(), "cancel edit");
                Ok(())
            }
            EditMode::Viewing => Err(TodoError::NotEditing { operation: "cancel edit" }),
        }
    }

    /// Ask the owning list to drop `record`; the mode is left as is
    pub fn request_remove(&self, record: &TaskRecord, actions: &impl ItemActions) {
        debug!(id = record.id, editing = self.is_editing(), "request remove");
        actions.remove_todo(record.id);
    }

    fn draft_for(&self, operation: &'static str) -> TodoResult<&Draft> {
        self.draft().ok_or(TodoError::NotEditing { operation })
    }
}
