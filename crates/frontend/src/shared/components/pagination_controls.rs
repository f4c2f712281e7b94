use crate::shared::i18n::{page_of, showing_caption, use_language};
use crate::shared::icons::icon;
use contracts::shared::list_query::PageSummary;
use leptos::prelude::*;

/// PaginationControls component - 1-based page navigation with the
/// "Showing X to Y of Z" caption.
///
/// Requested pages outside the range are clamped by the list pipeline, so
/// the buttons only need to stay disabled at the edges.
#[component]
pub fn PaginationControls(
    /// Summary of the page currently displayed
    #[prop(into)]
    summary: Signal<PageSummary>,

    /// Callback with the requested 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="pagination-controls">
            <span class="pagination-caption">
                {move || showing_caption(lang.get(), &summary.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !summary.get().has_previous()
                title=move || lang.get().pick("Primera página", "First page")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let s = summary.get();
                    if s.has_previous() {
                        on_page_change.run(s.page - 1);
                    }
                }
                disabled=move || !summary.get().has_previous()
                title=move || lang.get().pick("Página anterior", "Previous page")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let s = summary.get();
                    page_of(lang.get(), s.page, s.total_pages)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let s = summary.get();
                    if s.has_next() {
                        on_page_change.run(s.page + 1);
                    }
                }
                disabled=move || !summary.get().has_next()
                title=move || lang.get().pick("Página siguiente", "Next page")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(summary.get().total_pages)
                disabled=move || !summary.get().has_next()
                title=move || lang.get().pick("Última página", "Last page")
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
