use chrono::Utc;
use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::models::{Task, User};
use crate::core::services::{recent_tasks, DashboardStats};
use crate::features::dashboard::{RecentTasks, StatCard, TeamOverview};

#[component]
pub fn Dashboard(tasks: Vec<Task>, users: Vec<User>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let stats = DashboardStats::compute(&tasks, Utc::now().date_naive());
    let recent = recent_tasks(&tasks, config.recent_task_limit);

    view! {
        <div class="page dashboard-page">
            <h2 class="page-title">"Dashboard"</h2>
            <div class="stat-grid">
                <StatCard label="Total de tareas" value=stats.total.to_string() accent="accent-blue" />
                <StatCard label="En progreso" value=stats.in_progress.to_string() accent="accent-amber" />
                <StatCard
                    label="Completadas"
                    value=stats.completed.to_string()
                    accent="accent-green"
                    hint=format!("{}% completado", stats.completion_rate)
                />
                <StatCard label="Vencidas" value=stats.overdue.to_string() accent="accent-red" />
            </div>
            <div class="progress">
                <div class="progress-bar" style=format!("width: {}%", stats.completion_rate)></div>
            </div>
            <div class="dashboard-panels">
                <RecentTasks tasks=recent />
                <TeamOverview tasks=tasks users=users />
            </div>
        </div>
    }
}
