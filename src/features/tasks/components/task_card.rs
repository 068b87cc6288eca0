use leptos::prelude::*;
use crate::components::{PriorityBadge, TagList, UnassignedAvatar, UserAvatar};
use crate::core::config::AppConfig;
use crate::core::models::Task;

#[component]
pub fn TaskCard(task: Task, on_click: Callback<Task>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let due = task.due_date.map(|d| config.format_date(d));
    let tags = task.tags.clone();
    let assignee = task.assignee.clone();
    let title = task.title.clone();
    let priority = task.priority;

    view! {
        <div class="task-card clickable" on:click=move |_| on_click.run(task.clone())>
            <div class="task-card-header">
                <h4>{title}</h4>
                <PriorityBadge priority=priority />
            </div>
            <TagList tags=tags />
            <div class="task-card-footer">
                <span class="task-due">{due.unwrap_or_default()}</span>
                {match assignee {
                    Some(user) => view! { <UserAvatar user=user size="sm" /> }.into_any(),
                    None => view! { <UnassignedAvatar /> }.into_any(),
                }}
            </div>
        </div>
    }
}
