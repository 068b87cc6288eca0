use leptos::prelude::*;
use crate::core::models::{Task, TaskStatus};
use super::TaskCard;

#[component]
pub fn TaskColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    on_task_click: Callback<Task>,
) -> impl IntoView {
    let count = tasks.len();
    view! {
        <div class=format!("task-column {}", status.css_class())>
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div class="column-content">
                {if tasks.is_empty() {
                    view! { <p class="column-empty">"Sin tareas"</p> }.into_any()
                } else {
                    tasks
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task on_click=on_task_click /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
