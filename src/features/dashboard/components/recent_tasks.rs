use leptos::prelude::*;
use crate::components::{StatusBadge, UnassignedAvatar, UserAvatar};
use crate::core::models::Task;

#[component]
pub fn RecentTasks(tasks: Vec<Task>) -> impl IntoView {
    view! {
        <section class="panel recent-tasks">
            <h3>"Tareas recientes"</h3>
            <ul class="recent-task-list">
                {tasks.into_iter().map(|task| {
                    view! {
                        <li class="recent-task">
                            {match task.assignee {
                                Some(user) => view! { <UserAvatar user=user size="sm" /> }.into_any(),
                                None => view! { <UnassignedAvatar /> }.into_any(),
                            }}
                            <span class="recent-task-title">{task.title}</span>
                            <StatusBadge status=task.status />
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
