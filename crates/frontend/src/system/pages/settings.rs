use crate::shared::config::{Config, CONFIG_STORAGE_KEY};
use crate::shared::i18n::use_language;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

/// Read-only view of the effective configuration
#[component]
pub fn SettingsPage() -> impl IntoView {
    let lang = use_language();
    let config = use_context::<Config>().expect("Config context not found");

    let rendered = match toml::to_string_pretty(&config) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to render config: {e}");
            String::new()
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Configuración", "Settings")}</h1>
                </div>
            </div>
            <div class="page__content">
                <p class="text-muted">
                    {move || lang.get().pick(
                        "Configuración efectiva. Se puede sustituir guardando un TOML en localStorage con la clave",
                        "Effective configuration. Override it by storing TOML in localStorage under the key",
                    )}
                    " "
                    <code>{CONFIG_STORAGE_KEY}</code>
                </p>
                <pre class="config-view">{rendered}</pre>
            </div>
        </PageFrame>
    }
}
