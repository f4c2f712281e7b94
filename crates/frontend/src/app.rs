use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, Config};
use crate::system::auth::context::AuthProvider;
use contracts::shared::menu::MenuCatalog;
use contracts::system::navigation::portal_catalog;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Configuration error, falling back to built-in defaults: {err:#}");
        Config::default()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config.portal.default_language));

    let catalog = portal_catalog().unwrap_or_else(|err| {
        log::error!("Invalid navigation catalog: {err}");
        MenuCatalog::default()
    });
    provide_context(catalog);
    provide_context(config);

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
