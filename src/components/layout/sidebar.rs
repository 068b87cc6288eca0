use leptos::prelude::*;
use crate::app::AppView;

fn icon(view: AppView) -> &'static str {
    match view {
        AppView::Dashboard => "▦",
        AppView::Tasks => "☑",
        AppView::Sprints => "⟳",
        AppView::Team => "☺",
        AppView::Reports => "▤",
        AppView::Settings => "⚙",
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] active_view: Signal<AppView>,
    on_select: Callback<AppView>,
) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar-nav">
                {AppView::ALL.into_iter().map(|view| {
                    view! {
                        <li>
                            <button
                                class="sidebar-item"
                                class:active=move || active_view.get() == view
                                on:click=move |_| on_select.run(view)
                            >
                                <span class="sidebar-icon">{icon(view)}</span>
                                <span class="sidebar-label">{view.label()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
