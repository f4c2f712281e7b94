use crate::shared::i18n::{filters_title, use_language};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel: header with the active-filter badge and the
/// pagination slot, body with the filter fields and optional tag row.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    /// Shown as a badge next to the title when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)]
    pagination: ViewFn,
    /// Chips of the active filters, below the fields
    #[prop(optional, into)]
    tags: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let lang = use_language();

    view! {
        <section class="filter-panel">
            <header class="filter-panel-header">
                <button
                    type="button"
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|open| *open = !*open)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{move || filters_title(lang.get())}</span>
                    <Show when=move || active_filters_count.get() != 0>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </button>
                <div class="filter-panel-header__center">{pagination.run()}</div>
            </header>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {children()}
                    {tags.map(|tags| view! { <div class="filter-panel__tags">{tags.run()}</div> })}
                </div>
            </div>
        </section>
    }
}

/// Removable chip for one active filter
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                type="button"
                class="filter-tag__remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}
