use crate::shared::query_params::{current_query, PARAM_LANG};
use contracts::enums::Language;
use contracts::shared::menu::{ExpandedGroups, MenuItem};
use leptos::prelude::*;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "portal_language";

/// Application-wide UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub language: RwSignal<Language>,
    /// Sidebar groups currently expanded, by menu item name
    pub expanded_groups: RwSignal<ExpandedGroups>,
}

impl AppGlobalContext {
    pub fn new(default_language: Language) -> Self {
        Self {
            left_open: RwSignal::new(true),
            language: RwSignal::new(default_language),
            expanded_groups: RwSignal::new(ExpandedGroups::new()),
        }
    }

    /// Language precedence: `?lang=` query param, then the stored choice,
    /// then the configured default already held by the signal.
    pub fn init_language(&self) {
        let from_query = current_query()
            .get(PARAM_LANG)
            .and_then(|code| Language::from_code(code));
        let stored = || stored_language().and_then(|code| Language::from_code(&code));

        if let Some(lang) = from_query.or_else(stored) {
            leptos::logging::log!("🌐 language from location/storage: {}", lang.code());
            self.language.set(lang);
        }
    }

    pub fn set_language(&self, lang: Language) {
        leptos::logging::log!("🌐 set_language: {}", lang.code());
        self.language.set(lang);
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, lang.code());
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, name: &str) {
        let mut expanded = false;
        self.expanded_groups.update(|groups| expanded = groups.toggle(name));
        leptos::logging::log!("📂 toggle_group: '{}' expanded={}", name, expanded);
    }

    pub fn is_group_expanded(&self, name: &str) -> bool {
        self.expanded_groups.with(|groups| groups.contains(name))
    }

    /// Expand the groups on the path to the active leaf; never collapses
    pub fn reveal_active(&self, items: &[MenuItem], current_path: &str) {
        let mut added = 0;
        self.expanded_groups
            .update(|groups| added = groups.auto_expand(items, current_path));
        if added > 0 {
            log::debug!("Auto-expanded {added} menu group(s) for {current_path}");
        }
    }
}

fn stored_language() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(LANGUAGE_STORAGE_KEY)
        .ok()?
}
