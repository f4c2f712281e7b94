use crate::shared::components::filter_panel::FilterTag;
use crate::shared::i18n::{all_option, use_language};
use crate::shared::icons::icon;
use contracts::shared::list_query::{FilterValue, ListViewState};
use leptos::prelude::*;
use thaw::*;

/// One choice of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub code: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A filter dropdown of a list page: key into `FilterSpec`, caption, choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterDef {
    pub fn new(key: &'static str, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label: label.into(),
            options,
        }
    }

    pub fn option_label(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.label.as_str())
    }
}

/// Dropdown bound to one filter of a list state.
///
/// Open/closed is the state's single `open_filter` id, so opening one
/// dropdown closes any other on the page. Escape closes it.
#[component]
pub fn FilterSelect(state: RwSignal<ListViewState>, def: FilterDef) -> impl IntoView {
    let lang = use_language();
    let key = def.key;
    let def = StoredValue::new(def);

    let selected = move || state.with(|s| s.filters.get(key).code().to_string());
    let is_open = move || state.with(|s| s.is_open(key));
    let current_label = move || {
        let code = selected();
        if code == FilterValue::ALL_CODE {
            all_option(lang.get()).to_string()
        } else {
            def.with_value(|d| d.option_label(&code).map(str::to_string))
                .unwrap_or(code)
        }
    };

    let choose = move |code: String| {
        log::debug!("Filter {key} -> {code}");
        state.update(|s| s.set_filter(key, FilterValue::from_code(&code)));
    };

    view! {
        <div
            class="filter-select"
            data-filter-key=key
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    state.update(|s| s.close_dropdown());
                }
            }
        >
            <span class="filter-select__label">{def.with_value(|d| d.label.clone())}</span>
            <button
                class="filter-select__button"
                class:filter-select__button--active=move || selected() != FilterValue::ALL_CODE
                on:click=move |_| state.update(|s| s.toggle_dropdown(key))
            >
                <span>{current_label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=is_open>
                <ul class="filter-select__menu">
                    <li
                        class="filter-select__option"
                        class:filter-select__option--selected=move || selected() == FilterValue::ALL_CODE
                        on:click=move |_| choose(FilterValue::ALL_CODE.to_string())
                    >
                        {move || all_option(lang.get())}
                    </li>
                    {def.with_value(|d| d.options.clone()).into_iter().map(|option| {
                        let code = option.code.clone();
                        let code_for_class = option.code.clone();
                        view! {
                            <li
                                class="filter-select__option"
                                class:filter-select__option--selected=move || selected() == code_for_class
                                on:click=move |_| choose(code.clone())
                            >
                                {option.label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// Row of filter dropdowns with a reset button
#[component]
pub fn ListFilters(
    state: RwSignal<ListViewState>,
    #[prop(into)] defs: Signal<Vec<FilterDef>>,
) -> impl IntoView {
    let lang = use_language();

    view! {
        <Flex gap=FlexGap::Medium align=FlexAlign::End style="flex-wrap: wrap;">
            {move || defs.get().into_iter().map(|def| view! {
                <FilterSelect state=state def=def />
            }).collect_view()}
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| state.update(|s| s.clear_filters())
                disabled=Signal::derive(move || state.with(|s| s.active_filter_count() == 0))
            >
                {move || crate::shared::i18n::clear_filters(lang.get())}
            </Button>
        </Flex>
    }
}

/// Chips for every non-`All` filter; removing one resets that filter
#[component]
pub fn ActiveFilterTags(
    state: RwSignal<ListViewState>,
    #[prop(into)] defs: Signal<Vec<FilterDef>>,
) -> impl IntoView {
    view! {
        <div class="filter-tags">
            {move || {
                let defs = defs.get();
                let active: Vec<(String, String)> = state.with(|s| {
                    s.filters
                        .active()
                        .map(|(key, code)| (key.to_string(), code.to_string()))
                        .collect()
                });
                active.into_iter().map(|(key, code)| {
                    let label = match defs.iter().find(|d| d.key == key) {
                        Some(def) => format!("{}: {}", def.label, def.option_label(&code).unwrap_or(&code)),
                        None => code.clone(),
                    };
                    view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| {
                                state.update(|s| s.set_filter(&key, FilterValue::All));
                            })
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}
