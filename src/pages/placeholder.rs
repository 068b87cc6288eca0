use leptos::prelude::*;

/// Titled panel for views that are not built yet.
#[component]
pub fn PlaceholderPage(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="page placeholder-page">
            <h2 class="page-title">{title}</h2>
            <div class="panel">
                <p class="placeholder-message">{message}</p>
            </div>
        </div>
    }
}
