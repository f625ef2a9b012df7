use leptos::prelude::*;

/// Dashboard stat card: a caption and one big number.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
