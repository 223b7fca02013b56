//! Importance Selector Component
//!
//! Dropdown over the importance options of the row being edited.

use leptos::prelude::*;
use todo_item_core::Importance;

use super::input_value;

/// Importance dropdown; reports the raw option value
#[component]
pub fn ImportanceSelector(
    options: Vec<Importance>,
    #[prop(into)] selected: Signal<Option<Importance>>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            name="importance"
            class="importance-select"
            prop:value=move || selected.get().map(|importance| importance.as_str().to_string()).unwrap_or_default()
            on:change=move |ev| {
                if let Some(value) = input_value(&ev) {
                    on_change(value);
                }
            }
        >
            {options.into_iter().map(|importance| {
                view! {
                    <option
                        value=importance.as_str()
                        selected=move || selected.get() == Some(importance)
                    >
                        {importance.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
