/// List helpers: column sort headers and filter options
use crate::shared::components::filter_select::FilterOption;
use contracts::enums::Language;
use contracts::shared::list_query::{ListViewState, SortKey};
use leptos::prelude::*;

/// Arrow for a column header: ▲/▼ on the sorted column, ⇅ elsewhere
pub fn get_sort_indicator(sort: Option<&SortKey>, field: &str) -> &'static str {
    match sort {
        Some(key) if key.field == field => {
            if key.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: Option<&SortKey>, field: &str) -> &'static str {
    match sort {
        Some(key) if key.field == field => "sort-icon active",
        _ => "sort-icon",
    }
}

/// Filter options for a closed enumeration, in declaration order
pub fn enum_options<T>(
    values: Vec<T>,
    code: fn(&T) -> &'static str,
    label: fn(&T, Language) -> &'static str,
    lang: Language,
) -> Vec<FilterOption> {
    values
        .iter()
        .map(|value| FilterOption::new(code(value), label(value, lang)))
        .collect()
}

/// Clickable header cell content bound to the column sort of a list state
#[component]
pub fn SortableHeader(
    state: RwSignal<ListViewState>,
    field: &'static str,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class="table__sortable-header"
            style="cursor:pointer;"
            on:click=move |_| {
                state.update(|s| s.toggle_sort(field));
                log::debug!("Sort toggled on {field}");
            }
        >
            {move || label.get()}
            <span class=move || state.with(|s| get_sort_class(s.sort.as_ref(), field))>
                {move || state.with(|s| get_sort_indicator(s.sort.as_ref(), field))}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Subject;

    fn key(field: &str, ascending: bool) -> SortKey {
        SortKey {
            field: field.to_string(),
            ascending,
        }
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(&key("date", true)), "date"), " ▲");
        assert_eq!(get_sort_indicator(Some(&key("date", false)), "date"), " ▼");
        assert_eq!(get_sort_indicator(Some(&key("date", true)), "score"), " ⇅");
        assert_eq!(get_sort_indicator(None, "score"), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(get_sort_class(Some(&key("score", true)), "score"), "sort-icon active");
        assert_eq!(get_sort_class(None, "score"), "sort-icon");
    }

    #[test]
    fn test_enum_options_follow_declaration_order() {
        let options = enum_options(Subject::all(), Subject::code, Subject::label, Language::EnUs);
        assert_eq!(options.len(), Subject::all().len());
        assert_eq!(options[0].code, Subject::all()[0].code());
        assert_eq!(options[0].label, Subject::all()[0].label(Language::EnUs));
    }
}
