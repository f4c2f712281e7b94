mod state;

use contracts::domain::a006_document::{
    available_years, data, DocumentCategory, FILTER_CATEGORY, FILTER_YEAR, SORT_ISSUED_ON,
    SORT_SIZE, SORT_TITLE,
};
use contracts::shared::dataset::DatasetProvider;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{
    ActiveFilterTags, FilterDef, FilterOption, ListFilters,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::list_utils::{enum_options, SortableHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, PAGE_SIZE};

/// Human readable file size, `850 KB` / `1.2 MB`
fn format_size(size_kb: u32) -> String {
    if size_kb >= 1024 {
        format!("{:.1} MB", size_kb as f64 / 1024.0)
    } else {
        format!("{size_kb} KB")
    }
}

#[component]
pub fn DocumentList() -> impl IntoView {
    let lang = use_language();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let dataset = data::dataset();
    let years = available_years(dataset.records());

    let page = Memo::new(move |_| state.with(|s| s.query_sorted(&dataset, PAGE_SIZE)));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_CATEGORY,
                lang.pick("Categoría", "Category"),
                enum_options(DocumentCategory::all(), DocumentCategory::code, DocumentCategory::label, lang),
            ),
            FilterDef::new(
                FILTER_YEAR,
                lang.pick("Curso escolar", "School year"),
                years.iter().map(|y| FilterOption::new(y.clone(), y.clone())).collect(),
            ),
        ]
    });

    let header = move |es: &'static str, en: &'static str| {
        Signal::derive(move || lang.get().pick(es, en).to_string())
    };

    view! {
        <PageFrame page_id="a006_document--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Documentos", "Documents")}</h1>
                    <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filter_count()))
                    pagination=move || view! {
                        <PaginationControls
                            summary=summary
                            on_page_change=Callback::new(move |p| state.update(|s| s.go_to_page(p)))
                        />
                    }
                    tags=move || view! { <ActiveFilterTags state=state defs=defs /> }
                >
                    <ListFilters state=state defs=defs />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_TITLE label=header("Documento", "Document") />
                                </TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Categoría", "Category")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Curso", "Year")}</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_ISSUED_ON label=header("Fecha", "Issued") />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_SIZE label=header("Tamaño", "Size") />
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|d| d.id.clone()
                                children=move |document| {
                                    let category = document.category;
                                    let issued_on = document.issued_on;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {icon("file-text")}
                                                    <span style="font-weight: 500;">{document.title.clone()}</span>
                                                    <span class="text-muted">" · " {document.file_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || category.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{document.school_year.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || format_date(issued_on, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_size(document.size_kb)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || page.with(|p| p.is_empty()).then(|| view! { <EmptyState /> })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(850), "850 KB");
        assert_eq!(format_size(1024), "1.0 MB");
        assert_eq!(format_size(1536), "1.5 MB");
    }
}
