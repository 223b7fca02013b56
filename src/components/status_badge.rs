//! Status Badge Component

use leptos::prelude::*;
use todo_item_core::{Status, StatusBadgeModel};

/// A status badge; clickable badges report their status through `on_select`
#[component]
pub fn StatusBadge(
    badge: StatusBadgeModel,
    on_select: impl Fn(Status) + Copy + 'static,
) -> impl IntoView {
    let status = badge.status;
    let clickable = badge.clickable;
    let style = badge.highlight.is_highlighted().then(|| {
        let color = badge.highlight.css_color();
        format!("background-color: {}; border-color: {};", color, color)
    });

    view! {
        <div
            class=badge.class()
            style=style
            on:click=move |_| {
                if clickable {
                    on_select(status);
                }
            }
        >
            {badge.label}
        </div>
    }
}
