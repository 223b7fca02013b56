//! Todo Item Component
//!
//! One row of the list. Shows the record, or an inline editor for it.
//! Mutations are delegated to the owning list through `change_status`
//! and `remove_todo`.

use leptos::prelude::*;
use todo_item_core::{
    ItemActions, ItemEditor, ItemViewModel, KeyAction, Status, TaskRecord, TodoResult,
};
use tracing::warn;

use crate::components::{input_value, ImportanceSelector, StatusBadge};
use crate::config::ActionLabels;

/// Parent callbacks for one row
#[derive(Clone, Copy)]
struct ItemCallbacks {
    change_status: Callback<TaskRecord>,
    remove_todo: Callback<u32>,
}

impl ItemActions for ItemCallbacks {
    fn change_status(&self, record: TaskRecord) {
        self.change_status.run(record);
    }

    fn remove_todo(&self, id: u32) {
        self.remove_todo.run(id);
    }
}

fn log_ignored(result: TodoResult<()>) {
    if let Err(err) = result {
        warn!(%err, "todo item operation ignored");
    }
}

/// A single to-do row with view and edit modes
#[component]
pub fn TodoItem(
    todo: TaskRecord,
    #[prop(into)] change_status: Callback<TaskRecord>,
    #[prop(into)] remove_todo: Callback<u32>,
    #[prop(optional)] labels: Option<ActionLabels>,
) -> impl IntoView {
    let labels = labels.unwrap_or_default();
    let actions = ItemCallbacks { change_status, remove_todo };
    let record = StoredValue::new(todo);
    let (editor, set_editor) = signal(ItemEditor::new());

    let model = Memo::new(move |_| {
        editor.with(|editor| record.with_value(|todo| ItemViewModel::build(editor, todo)))
    });
    let is_editing = Memo::new(move |_| editor.with(ItemEditor::is_editing));
    let badges = Memo::new(move |_| model.with(|model| model.badges().to_vec()));
    let selected_importance = Signal::derive(move || model.with(ItemViewModel::selected_importance));
    let importance_label = move || model.with(|model| model.stored_importance().label());
    let task = move || model.with(|model| model.task().to_string());

    // Handlers
    let begin_edit = move || set_editor.update(|editor| record.with_value(|todo| editor.begin_edit(todo)));
    let update_field = move |name: &'static str, value: String| {
        set_editor.update(|editor| log_ignored(editor.update_draft_field_raw(name, &value)));
    };
    let set_status = move |status: Status| {
        set_editor.update(|editor| log_ignored(editor.set_draft_status(status)));
    };
    let confirm = move || set_editor.update(|editor| log_ignored(editor.confirm_edit(&actions)));
    let cancel = move || set_editor.update(|editor| log_ignored(editor.cancel_edit()));
    let remove = move || {
        editor.with_untracked(|editor| record.with_value(|todo| editor.request_remove(todo, &actions)));
    };

    let confirm_label = labels.confirm;
    let cancel_label = labels.cancel;

    view! {
        <div class=move || model.with(ItemViewModel::container_class)>
            <div class="task-box">
                <div class="task-title-box">
                    <span class="importance-label">{importance_label}</span>

                    {move || if is_editing.get() {
                        let options = model.with_untracked(|model| model.importance_options().to_vec());
                        view! {
                            <ImportanceSelector
                                options=options
                                selected=selected_importance
                                on_change=move |value: String| update_field("importance", value)
                            />
                            <input
                                type="text"
                                name="task"
                                class="task-input"
                                prop:value=task
                                on:input=move |ev| {
                                    if let Some(value) = input_value(&ev) {
                                        update_field("task", value);
                                    }
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    match KeyAction::from_key(&ev.key()) {
                                        Some(KeyAction::Confirm) => {
                                            ev.prevent_default();
                                            confirm();
                                        }
                                        Some(KeyAction::Cancel) => cancel(),
                                        None => {}
                                    }
                                }
                            />
                        }.into_any()
                    } else {
                        let text = model.with_untracked(|model| model.task().to_string());
                        view! { <span class="task-text">{text}</span> }.into_any()
                    }}
                </div>

                // One badge in view mode, all three while editing
                <div class="status-box">
                    {move || badges.get().into_iter().map(|badge| {
                        view! { <StatusBadge badge=badge on_select=set_status /> }
                    }).collect_view()}
                </div>
            </div>

            {move || if is_editing.get() {
                view! {
                    <div class="button-box">
                        <button class="confirm-btn" on:click=move |_| confirm()>{confirm_label.clone()}</button>
                        <button class="cancel-btn" on:click=move |_| cancel()>{cancel_label.clone()}</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="action-box">
                        <button class="edit-btn" title="Edit" on:click=move |_| begin_edit()>"✎"</button>
                        <button class="delete-btn" title="Remove" on:click=move |_| remove()>"×"</button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
