use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let lang = use_language();
    let pathname = use_location().pathname;

    Effect::new(move |_| log::warn!("No route for {}", pathname.get()));

    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="empty-state">
                {icon("alert-triangle")}
                <h1 class="page__title">{move || lang.get().pick("Página no encontrada", "Page not found")}</h1>
                <p class="text-muted">{move || pathname.get()}</p>
                <a href="/">{move || lang.get().pick("Volver al inicio", "Back to overview")}</a>
            </div>
        </PageFrame>
    }
}
