//! Todo App
//!
//! Root component: provides the list store and renders the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::config::AppConfig;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(Store::new(TodoState::new(config.todos)));

    view! {
        <main class="app">
            <h1>"Todo"</h1>
            <TodoList labels=config.labels />
        </main>
    }
}
