//! UI Components
//!
//! Leptos components for the to-do list.

mod todo_item;
mod todo_list;
mod status_badge;
mod importance_selector;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use status_badge::StatusBadge;
pub use importance_selector::ImportanceSelector;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` or `<select>` that fired `ev`
pub(crate) fn input_value(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<web_sys::HtmlSelectElement>().map(|select| select.value())
}
