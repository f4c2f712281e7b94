use crate::shared::i18n::{no_records, use_language};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown instead of table rows when nothing matches
#[component]
pub fn EmptyState() -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="empty-state">
            {icon("inbox")}
            <span>{move || no_records(lang.get())}</span>
        </div>
    }
}
