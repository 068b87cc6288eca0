use leptos::ev;
use leptos::prelude::*;

use crate::components::{Header, Sidebar, TaskModal};
use crate::core::config::AppConfig;
use crate::core::models::Task;
use crate::core::services::{current_user, mock_project, mock_tasks, mock_users};
use crate::pages::{Dashboard, PlaceholderPage, TasksPage, Team};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppView {
    #[default]
    Dashboard,
    Tasks,
    Sprints,
    Team,
    Reports,
    Settings,
}

impl AppView {
    /// Sidebar order.
    pub const ALL: [AppView; 6] = [
        AppView::Dashboard,
        AppView::Tasks,
        AppView::Sprints,
        AppView::Team,
        AppView::Reports,
        AppView::Settings,
    ];

    /// Unknown keys land on the dashboard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "dashboard" => AppView::Dashboard,
            "tasks" => AppView::Tasks,
            "sprints" => AppView::Sprints,
            "team" => AppView::Team,
            "reports" => AppView::Reports,
            "settings" => AppView::Settings,
            _ => AppView::Dashboard,
        }
    }

    /// Parses a location fragment such as `#team`; a missing or unknown key is the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        Self::from_key(hash.strip_prefix('#').unwrap_or(hash))
    }

    /// Canonical location fragment for this view.
    pub fn fragment(&self) -> String {
        format!("#{}", self.key())
    }

    pub fn key(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Tasks => "tasks",
            AppView::Sprints => "sprints",
            AppView::Team => "team",
            AppView::Reports => "reports",
            AppView::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Tasks => "Tareas",
            AppView::Sprints => "Sprints",
            AppView::Team => "Equipo",
            AppView::Reports => "Reportes",
            AppView::Settings => "Configuración",
        }
    }
}

/// State owned by the shell and handed down to the views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub active_view: AppView,
    pub selected_task: Option<Task>,
    pub task_modal_open: bool,
}

impl ShellState {
    pub fn new(active_view: AppView) -> Self {
        Self {
            active_view,
            ..Self::default()
        }
    }

    pub fn select_view(&mut self, view: AppView) {
        self.active_view = view;
    }

    pub fn open_task(&mut self, task: Task) {
        self.selected_task = Some(task);
        self.task_modal_open = true;
    }

    pub fn close_task_modal(&mut self) {
        self.task_modal_open = false;
        self.selected_task = None;
    }
}

fn current_hash() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hash().ok())
}

fn initial_view() -> AppView {
    let view = current_hash()
        .map(|hash| AppView::from_hash(&hash))
        .unwrap_or_default();
    normalize_location(view);
    view
}

// Rewrites a stale or unknown fragment in place, without a new history entry
fn normalize_location(view: AppView) {
    let fragment = view.fragment();
    if current_hash().as_deref() == Some(fragment.as_str()) {
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().replace(&fragment) {
            log::warn!("Could not normalize location hash: {:?}", e);
        }
    }
}

fn write_view_to_location(view: AppView) {
    if current_hash().as_deref() == Some(view.fragment().as_str()) {
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(view.key()) {
            log::warn!("Could not update location hash: {:?}", e);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    provide_context(config.clone());

    let tasks = mock_tasks();
    let users = mock_users();
    let project = mock_project();
    let logged_in = current_user(&users, &config.current_user_id);

    let shell = RwSignal::new(ShellState::new(initial_view()));

    let select_view = Callback::new(move |view: AppView| {
        log::debug!("Switching to view {}", view.key());
        shell.update(|s| s.select_view(view));
        write_view_to_location(view);
    });

    let open_task = Callback::new(move |task: Task| {
        log::debug!("Opening task {}", task.id);
        shell.update(|s| s.open_task(task));
    });

    let close_task_modal = Callback::new(move |_: ()| {
        shell.update(|s| s.close_task_modal());
    });

    // Escape closes the modal from anywhere on the page
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && shell.with_untracked(|s| s.task_modal_open) {
            close_task_modal.run(());
        }
    });

    // Back/forward and hand-edited fragments drive the active view
    let _ = window_event_listener(ev::hashchange, move |_| {
        let view = current_hash()
            .map(|hash| AppView::from_hash(&hash))
            .unwrap_or_default();
        if shell.with_untracked(|s| s.active_view) != view {
            log::debug!("Location changed to view {}", view.key());
            shell.update(|s| s.select_view(view));
        }
        normalize_location(view);
    });

    let active_view = Signal::derive(move || shell.with(|s| s.active_view));
    let selected_task = Signal::derive(move || shell.with(|s| s.selected_task.clone()));
    let modal_open = Signal::derive(move || shell.with(|s| s.task_modal_open));

    let modal_users = users.clone();

    view! {
        <div class="app">
            <Header current_user=logged_in project=project />
            <div class="app-body">
                <Sidebar active_view=active_view on_select=select_view />
                <main class="app-main">
                    {move || match active_view.get() {
                        AppView::Dashboard => view! {
                            <Dashboard tasks=tasks.clone() users=users.clone() />
                        }.into_any(),
                        AppView::Tasks => view! {
                            <TasksPage tasks=tasks.clone() on_task_click=open_task />
                        }.into_any(),
                        AppView::Sprints => view! {
                            <PlaceholderPage
                                title="Gestión de Sprints"
                                message="Vista de sprints en desarrollo..."
                            />
                        }.into_any(),
                        AppView::Team => view! {
                            <Team tasks=tasks.clone() users=users.clone() />
                        }.into_any(),
                        AppView::Reports => view! {
                            <PlaceholderPage
                                title="Reportes y Métricas"
                                message="Dashboard de reportes en desarrollo..."
                            />
                        }.into_any(),
                        AppView::Settings => view! {
                            <PlaceholderPage
                                title="Configuración"
                                message="Panel de configuración en desarrollo..."
                            />
                        }.into_any(),
                    }}
                </main>
            </div>

            <TaskModal
                task=selected_task
                is_open=modal_open
                on_close=close_task_modal
                users=modal_users
            />
        </div>
    }
}
