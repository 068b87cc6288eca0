use leptos::prelude::*;
use crate::components::UserAvatar;
use crate::core::models::{Project, User};

#[component]
pub fn Header(
    current_user: Option<User>,
    project: Option<Project>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <span class="brand">"TaskFlow"</span>
                {project.map(|project| view! {
                    <span class="project-name">{project.name}</span>
                    <span class="badge project-status">{project.status.as_str()}</span>
                })}
            </div>
            <div class="app-header-right">
                {current_user.map(|user| {
                    let name = user.name.clone();
                    let role = user.role.clone();
                    view! {
                        <div class="current-user">
                            <div class="current-user-info">
                                <span class="current-user-name">{name}</span>
                                <span class="current-user-role">{role}</span>
                            </div>
                            <UserAvatar user=user size="sm" />
                        </div>
                    }
                })}
            </div>
        </header>
    }
}
