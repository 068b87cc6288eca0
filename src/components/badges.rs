use leptos::prelude::*;
use crate::core::models::{TaskPriority, TaskStatus};

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    view! {
        <span class=format!("badge {}", status.css_class())>{status.as_str()}</span>
    }
}

#[component]
pub fn PriorityBadge(priority: TaskPriority) -> impl IntoView {
    view! {
        <span class=format!("badge {}", priority.css_class())>{priority.as_str()}</span>
    }
}

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
    }
}
