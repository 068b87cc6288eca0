use leptos::prelude::*;
use crate::components::{PriorityBadge, StatusBadge, TagList, UnassignedAvatar, UserAvatar};
use crate::core::config::AppConfig;
use crate::core::models::{Task, User};
use crate::core::services::resolve_assignee;

#[component]
pub fn TaskModal(
    #[prop(into)] task: Signal<Option<Task>>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    users: Vec<User>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    move || {
        if !is_open.get() {
            return None;
        }
        let task = task.get()?;

        let assignee = resolve_assignee(&task, &users);
        let due = task
            .due_date
            .map(|d| config.format_date(d))
            .unwrap_or_else(|| "Sin fecha".to_string());
        let points = task
            .story_points
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let created = config.format_timestamp(task.created_at);
        let updated = config.format_timestamp(task.updated_at);
        let reporter = task.reporter.name.clone();

        Some(view! {
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-content task-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{task.title.clone()}</h3>
                        <button
                            type="button"
                            class="modal-close"
                            title="Cerrar"
                            on:click=move |_| on_close.run(())
                        >"×"</button>
                    </div>
                    <div class="modal-badges">
                        <StatusBadge status=task.status />
                        <PriorityBadge priority=task.priority />
                    </div>
                    <p class="modal-description">{task.description.clone()}</p>
                    <dl class="task-details">
                        <dt>"Asignado a"</dt>
                        <dd>
                            {match assignee {
                                Some(user) => {
                                    let name = user.name.clone();
                                    view! {
                                        <span class="assignee">
                                            <UserAvatar user=user size="sm" />
                                            <span>{name}</span>
                                        </span>
                                    }.into_any()
                                }
                                None => view! {
                                    <span class="assignee">
                                        <UnassignedAvatar />
                                        <span>"Sin asignar"</span>
                                    </span>
                                }.into_any(),
                            }}
                        </dd>
                        <dt>"Reportado por"</dt>
                        <dd>{reporter}</dd>
                        <dt>"Fecha límite"</dt>
                        <dd>{due}</dd>
                        <dt>"Puntos de historia"</dt>
                        <dd>{points}</dd>
                        <dt>"Creada"</dt>
                        <dd>{created}</dd>
                        <dt>"Actualizada"</dt>
                        <dd>{updated}</dd>
                    </dl>
                    <TagList tags=task.tags.clone() />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </div>
        })
    }
}
