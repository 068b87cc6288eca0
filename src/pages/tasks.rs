use leptos::prelude::*;
use crate::core::models::Task;
use crate::features::tasks::TaskBoard;

#[component]
pub fn TasksPage(tasks: Vec<Task>, on_task_click: Callback<Task>) -> impl IntoView {
    view! {
        <div class="page tasks-page">
            <h2 class="page-title">"Tablero de Tareas"</h2>
            <TaskBoard tasks=tasks on_task_click=on_task_click />
        </div>
    }
}
