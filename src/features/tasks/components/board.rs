use leptos::prelude::*;
use crate::core::models::{Task, TaskStatus};
use crate::core::services::{filter_tasks, tasks_with_status};
use super::TaskColumn;

/// Read-only board with one column per status.
#[component]
pub fn TaskBoard(tasks: Vec<Task>, on_task_click: Callback<Task>) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let visible = move || query.with(|q| filter_tasks(&tasks, q));

    view! {
        <div class="task-board">
            <div class="task-board-toolbar">
                <input
                    type="search"
                    class="task-search"
                    placeholder="Buscar tareas..."
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    prop:value=move || query.get()
                />
            </div>
            <div class="task-columns">
                {move || {
                    let visible = visible();
                    TaskStatus::all()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <TaskColumn
                                    status=status
                                    tasks=tasks_with_status(&visible, status)
                                    on_task_click=on_task_click
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
