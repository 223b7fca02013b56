//! Todo List Component
//!
//! Renders one `TodoItem` per stored record and applies their requests.

use leptos::prelude::*;
use todo_item_core::TaskRecord;

use crate::components::TodoItem;
use crate::config::ActionLabels;
use crate::store::{store_change_todo, store_remove_todo, store_todos, use_todo_store};

#[component]
pub fn TodoList(#[prop(optional)] labels: Option<ActionLabels>) -> impl IntoView {
    let store = use_todo_store();
    let labels = labels.unwrap_or_default();

    let change_status = Callback::new(move |record: TaskRecord| store_change_todo(&store, record));
    let remove_todo = Callback::new(move |id: u32| store_remove_todo(&store, id));

    view! {
        <div class="todo-list">
            <For
                each=move || store_todos(&store)
                // Whole record as key so a confirmed edit re-renders the row
                key=|todo| todo.clone()
                children=move |todo| {
                    view! {
                        <TodoItem
                            todo=todo
                            change_status=change_status
                            remove_todo=remove_todo
                            labels=labels.clone()
                        />
                    }
                }
            />
            <Show when=move || store_todos(&store).is_empty()>
                <p class="empty-list">"Nothing to do"</p>
            </Show>
        </div>
    }
}
