use leptos::prelude::*;
use crate::core::models::User;

#[component]
pub fn UserAvatar(
    user: User,
    /// One of "sm", "md", "lg"; defaults to "md".
    #[prop(optional)] size: Option<&'static str>,
) -> impl IntoView {
    let class = format!("avatar avatar-{}", size.unwrap_or("md"));
    view! {
        <img
            class=class
            src=user.avatar.clone()
            alt=user.name.clone()
            title=user.name.clone()
        />
    }
}

/// Stand-in shown where a task has nobody assigned.
#[component]
pub fn UnassignedAvatar() -> impl IntoView {
    view! { <span class="avatar avatar-sm avatar-empty" title="Sin asignar">"?"</span> }
}
