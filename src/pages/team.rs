use leptos::prelude::*;
use crate::components::UserAvatar;
use crate::core::models::{Task, User};
use crate::core::services::assigned_task_count;

#[component]
fn TeamMemberCard(user: User, assigned: usize) -> impl IntoView {
    let name = user.name.clone();
    let role = user.role.clone();
    let email = user.email.clone();
    view! {
        <div class="member-card">
            <div class="member-card-header">
                <UserAvatar user=user size="lg" />
                <div>
                    <h3 class="member-name">{name}</h3>
                    <p class="member-role">{role}</p>
                    <p class="member-email">{email}</p>
                </div>
            </div>
            <div class="member-card-footer">
                <span>"Tareas asignadas:"</span>
                <span class="member-task-count">{assigned}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Team(tasks: Vec<Task>, users: Vec<User>) -> impl IntoView {
    view! {
        <div class="page team-page">
            <h2 class="page-title">"Equipo de Trabajo"</h2>
            <div class="member-grid">
                {users.into_iter().map(|user| {
                    let assigned = assigned_task_count(&tasks, &user.id);
                    view! { <TeamMemberCard user=user assigned=assigned /> }
                }).collect_view()}
            </div>
        </div>
    }
}
