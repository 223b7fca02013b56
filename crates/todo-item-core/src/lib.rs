//! Todo Item Core
//!
//! Domain layer for a single to-do row:
//! - models: task record and its closed enumerations
//! - editor: the view/edit state machine and draft updates
//! - theme: status highlight derivation
//! - key_action: keyboard shortcuts of the inline editor
//! - view_model: what each mode renders, independent of the DOM
//!
//! This crate has no browser dependencies so it can be tested natively.

mod error;
mod models;
mod editor;
mod theme;
mod key_action;
mod view_model;

pub use error::{TodoError, TodoResult};
pub use models::{TaskRecord, Status, Importance};
pub use editor::{ItemEditor, ItemActions, Draft, DraftField, EditMode};
pub use theme::{ColorToken, highlight_for};
pub use key_action::KeyAction;
pub use view_model::{ItemViewModel, StatusBadgeModel};
