//! Item View Model
//!
//! What a row shows in each mode, derived from the stored record and the editor.
//! The Leptos component renders this directly.

use crate::editor::{EditMode, ItemEditor};
use crate::models::{Importance, Status, TaskRecord};
use crate::theme::{highlight_for, ColorToken};

/// One status badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadgeModel {
    pub status: Status,
    pub label: &'static str,
    pub highlight: ColorToken,
    /// Clicking selects this status for the draft
    pub clickable: bool,
}

impl StatusBadgeModel {
    /// Space separated class list for the badge element
    pub fn class(&self) -> String {
        let mut class = String::from("status-badge");
        if self.clickable {
            class.push_str(" selectable");
        }
        if self.highlight.is_highlighted() {
            class.push(' ');
            class.push_str(self.highlight.css_class());
        }
        class
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemViewModel {
    Viewing {
        id: u32,
        importance: Importance,
        task: String,
        badge: StatusBadgeModel,
    },
    Editing {
        id: u32,
        /// Importance of the stored record, shown beside the selector
        stored_importance: Importance,
        /// Selected option, from the draft
        importance: Importance,
        importance_options: [Importance; 3],
        task: String,
        badges: Vec<StatusBadgeModel>,
    },
}

impl ItemViewModel {
    pub fn build(editor: &ItemEditor, record: &TaskRecord) -> Self {
        match editor.mode() {
            EditMode::Viewing => ItemViewModel::Viewing {
                id: record.id,
                importance: record.importance,
                task: record.task.clone(),
                badge: StatusBadgeModel {
                    status: record.status,
                    label: record.status.label(),
                    highlight: ColorToken::None,
                    clickable: false,
                },
            },
            EditMode::Editing(draft) => ItemViewModel::Editing {
                id: record.id,
                stored_importance: record.importance,
                importance: draft.importance(),
                importance_options: Importance::ALL,
                task: draft.task().to_string(),
                badges: Status::ALL
                    .iter()
                    .map(|&status| StatusBadgeModel {
                        status,
                        label: status.label(),
                        highlight: highlight_for(status, draft.status()),
                        clickable: true,
                    })
                    .collect(),
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ItemViewModel::Editing { .. })
    }

    pub fn badges(&self) -> &[StatusBadgeModel] {
        match self {
            ItemViewModel::Viewing { badge, .. } => std::slice::from_ref(badge),
            ItemViewModel::Editing { badges, .. } => badges,
        }
    }

    pub fn task(&self) -> &str {
        match self {
            ItemViewModel::Viewing { task, .. } | ItemViewModel::Editing { task, .. } => task,
        }
    }

    /// Importance of the stored record; shown in both modes
    pub fn stored_importance(&self) -> Importance {
        match self {
            ItemViewModel::Viewing { importance, .. } => *importance,
            ItemViewModel::Editing { stored_importance, .. } => *stored_importance,
        }
    }

    /// Option chosen in the selector, only while editing
    pub fn selected_importance(&self) -> Option<Importance> {
        match self {
            ItemViewModel::Viewing { .. } => None,
            ItemViewModel::Editing { importance, .. } => Some(*importance),
        }
    }

    /// Selector options; empty in view mode
    pub fn importance_options(&self) -> &[Importance] {
        match self {
            ItemViewModel::Viewing { .. } => &[],
            ItemViewModel::Editing { importance_options, .. } => importance_options,
        }
    }

    /// Container class; the row grows while editing
    pub fn container_class(&self) -> &'static str {
        if self.is_editing() {
            "todo-item editing"
        } else {
            "todo-item"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::DraftField;

    fn records() -> Vec<TaskRecord> {
        let mut out = Vec::new();
        let mut id = 0;
        for status in Status::ALL {
            for importance in Importance::ALL {
                id += 1;
                out.push(TaskRecord::new(id, format!("Task {}", id), status, importance));
            }
        }
        out
    }

    #[test]
    fn test_view_mode_shows_record_verbatim() {
        let editor = ItemEditor::new();
        for record in records() {
            let model = ItemViewModel::build(&editor, &record);
            match &model {
                ItemViewModel::Viewing { id, importance, task, badge } => {
                    assert_eq!(*id, record.id);
                    assert_eq!(*importance, record.importance);
                    assert_eq!(task, &record.task);
                    assert_eq!(badge.status, record.status);
                    assert!(!badge.clickable);
                }
                other => panic!("expected view mode, got {:?}", other),
            }
            assert_eq!(model.badges().len(), 1);
            assert_eq!(model.container_class(), "todo-item");
        }
    }

    #[test]
    fn test_edit_mode_lists_all_options() {
        let record = TaskRecord::new(3, "Plan", Status::Ongoing, Importance::Low);
        let mut editor = ItemEditor::new();
        editor.begin_edit(&record);

        let model = ItemViewModel::build(&editor, &record);
        let statuses: Vec<Status> = model.badges().iter().map(|b| b.status).collect();
        assert_eq!(statuses, Status::ALL.to_vec());
        assert!(model.badges().iter().all(|b| b.clickable));
        assert_eq!(model.task(), "Plan");
        assert_eq!(model.container_class(), "todo-item editing");

        if let ItemViewModel::Editing { importance_options, importance, .. } = &model {
            assert_eq!(*importance_options, Importance::ALL);
            assert_eq!(*importance, Importance::Low);
        } else {
            panic!("expected edit mode");
        }
    }

    #[test]
    fn test_only_draft_status_highlighted() {
        let record = TaskRecord::new(1, "Write report", Status::Pending, Importance::High);
        let mut editor = ItemEditor::new();
        editor.begin_edit(&record);
        editor.set_draft_status(Status::Ongoing).unwrap();

        let model = ItemViewModel::build(&editor, &record);
        let highlights: Vec<ColorToken> = model.badges().iter().map(|b| b.highlight).collect();
        assert_eq!(highlights, vec![ColorToken::None, ColorToken::Yellow, ColorToken::None]);
        assert_eq!(model.badges()[1].class(), "status-badge selectable badge-yellow");
        assert_eq!(model.badges()[0].class(), "status-badge selectable");
    }

    #[test]
    fn test_edit_mode_keeps_stored_importance_label() {
        let record = TaskRecord::new(1, "Write report", Status::Pending, Importance::High);
        let mut editor = ItemEditor::new();
        editor.begin_edit(&record);
        editor.update_draft_field(DraftField::Importance(Importance::Low)).unwrap();

        match ItemViewModel::build(&editor, &record) {
            ItemViewModel::Editing { stored_importance, importance, .. } => {
                assert_eq!(stored_importance, Importance::High);
                assert_eq!(importance, Importance::Low);
            }
            other => panic!("expected edit mode, got {:?}", other),
        }
    }

    #[test]
    fn test_importance_accessors() {
        let record = TaskRecord::new(4, "Stretch", Status::Pending, Importance::Mid);
        let mut editor = ItemEditor::new();

        let viewing = ItemViewModel::build(&editor, &record);
        assert_eq!(viewing.stored_importance(), Importance::Mid);
        assert_eq!(viewing.selected_importance(), None);
        assert!(viewing.importance_options().is_empty());

        editor.begin_edit(&record);
        editor.update_draft_field_raw("importance", "high").unwrap();
        editor.update_draft_field_raw("task", "Stretch twice").unwrap();
        let editing = ItemViewModel::build(&editor, &record);
        assert_eq!(editing.stored_importance(), Importance::Mid);
        assert_eq!(editing.selected_importance(), Some(Importance::High));
        assert_eq!(editing.importance_options(), &Importance::ALL[..]);
        assert_eq!(editing.task(), "Stretch twice");
    }

    #[test]
    fn test_cancel_restores_view() {
        let record = TaskRecord::new(1, "Write report", Status::Pending, Importance::High);
        let mut editor = ItemEditor::new();
        let before = ItemViewModel::build(&editor, &record);

        editor.begin_edit(&record);
        editor.update_draft_field(DraftField::Task("other".to_string())).unwrap();
        editor.cancel_edit().unwrap();

        assert_eq!(ItemViewModel::build(&editor, &record), before);
    }
}
