use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    /// Colour modifier, e.g. "accent-blue".
    accent: &'static str,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", accent)>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
            {hint.map(|hint| view! { <span class="stat-hint">{hint}</span> })}
        </div>
    }
}
