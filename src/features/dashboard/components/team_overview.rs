use leptos::prelude::*;
use crate::components::UserAvatar;
use crate::core::models::{Task, User};
use crate::core::services::assigned_task_count;

#[component]
pub fn TeamOverview(tasks: Vec<Task>, users: Vec<User>) -> impl IntoView {
    view! {
        <section class="panel team-overview">
            <h3>"Equipo"</h3>
            <ul class="team-overview-list">
                {users.into_iter().map(|user| {
                    let count = assigned_task_count(&tasks, &user.id);
                    let name = user.name.clone();
                    let role = user.role.clone();
                    view! {
                        <li class="team-overview-member">
                            <UserAvatar user=user size="sm" />
                            <div class="member-info">
                                <span class="member-name">{name}</span>
                                <span class="member-role">{role}</span>
                            </div>
                            <span class="member-task-count">{count}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
