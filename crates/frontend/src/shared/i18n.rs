//! UI label localisation (es-ES / en-US)

use crate::layout::global_context::AppGlobalContext;
use contracts::enums::Language;
use contracts::shared::list_query::PageSummary;
use leptos::prelude::*;

/// Current interface language from the global context
pub fn use_language() -> RwSignal<Language> {
    use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found")
        .language
}

/// "Mostrando 1 a 10 de 12" / "Showing 1 to 10 of 12"
pub fn showing_caption(lang: Language, summary: &PageSummary) -> String {
    if summary.total_count == 0 {
        return no_records(lang).to_string();
    }
    match lang {
        Language::EsEs => format!(
            "Mostrando {} a {} de {}",
            summary.start_index, summary.end_index, summary.total_count
        ),
        Language::EnUs => format!(
            "Showing {} to {} of {}",
            summary.start_index, summary.end_index, summary.total_count
        ),
    }
}

/// "Página 2 de 3" / "Page 2 of 3"
pub fn page_of(lang: Language, page: usize, total_pages: usize) -> String {
    match lang {
        Language::EsEs => format!("Página {} de {}", page, total_pages),
        Language::EnUs => format!("Page {} of {}", page, total_pages),
    }
}

pub fn no_records(lang: Language) -> &'static str {
    lang.pick("No se encontraron registros", "No records found")
}

pub fn all_option(lang: Language) -> &'static str {
    lang.pick("Todos", "All")
}

pub fn filters_title(lang: Language) -> &'static str {
    lang.pick("Filtros", "Filters")
}

pub fn clear_filters(lang: Language) -> &'static str {
    lang.pick("Limpiar filtros", "Clear filters")
}
