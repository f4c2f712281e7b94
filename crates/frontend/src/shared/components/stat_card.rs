use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary tile of the overview dashboard
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted primary value
    #[prop(into)]
    value: Signal<String>,
    /// Secondary line under the value
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
    /// Highlights the card when the value needs attention
    #[prop(optional, into)]
    alert: Signal<bool>,
    /// Page the card links to
    #[prop(optional)]
    href: Option<&'static str>,
) -> impl IntoView {
    let body = view! {
        <div class="stat-card__header">
            <span class="stat-card__icon">{icon(icon_name)}</span>
            <span class="stat-card__label">{move || label.get()}</span>
        </div>
        <div class="stat-card__value">{move || value.get()}</div>
        {hint.map(|hint| view! { <div class="stat-card__hint">{move || hint.get()}</div> })}
    };

    view! {
        <a
            class="stat-card"
            class:stat-card--alert=move || alert.get()
            href=href.unwrap_or("#")
        >
            {body}
        </a>
    }
}
