//! Todo List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Owns the records rendered by `TodoList` and applies the mutations
//! requested by each row.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_item_core::TaskRecord;
use tracing::{debug, warn};

/// List state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Records in display order
    pub todos: Vec<TaskRecord>,
}

impl TodoState {
    pub fn new(todos: Vec<TaskRecord>) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the records, tracked
pub fn store_todos(store: &TodoStore) -> Vec<TaskRecord> {
    store.todos().get()
}

/// Replace a record by ID with the confirmed draft
pub fn store_change_todo(store: &TodoStore, record: TaskRecord) {
    let id = record.id;
    if apply_change(&mut store.todos().write(), record) {
        debug!(id, "todo changed");
    } else {
        warn!(id, "change for unknown todo ignored");
    }
}

/// Remove a record by ID
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    if apply_remove(&mut store.todos().write(), id) {
        debug!(id, "todo removed");
    } else {
        warn!(id, "remove for unknown todo ignored");
    }
}

/// Full replacement of the record with the same id. Returns false if absent.
pub fn apply_change(todos: &mut Vec<TaskRecord>, record: TaskRecord) -> bool {
    match todos.iter_mut().find(|todo| todo.id == record.id) {
        Some(todo) => {
            *todo = record;
            true
        }
        None => false,
    }
}

pub fn apply_remove(todos: &mut Vec<TaskRecord>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    todos.len() != before
}
