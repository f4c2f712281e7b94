mod state;

use contracts::domain::a001_absence::{
    data, AbsenceKind, AbsenceStatus, FILTER_KIND, FILTER_STATUS, FILTER_SUBJECT,
};
use contracts::enums::Subject;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{ActiveFilterTags, FilterDef, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::use_language;
use crate::shared::list_utils::enum_options;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, PAGE_SIZE};

fn status_badge_class(status: AbsenceStatus) -> &'static str {
    match status {
        AbsenceStatus::Justified => "badge badge--success",
        AbsenceStatus::Unjustified => "badge badge--error",
        AbsenceStatus::Pending => "badge badge--warning",
    }
}

#[component]
pub fn AbsenceList() -> impl IntoView {
    let lang = use_language();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);

    let page = Memo::new(move |_| state.with(|s| s.query(&data::dataset(), None, PAGE_SIZE)));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_STATUS,
                lang.pick("Estado", "Status"),
                enum_options(AbsenceStatus::all(), AbsenceStatus::code, AbsenceStatus::label, lang),
            ),
            FilterDef::new(
                FILTER_SUBJECT,
                lang.pick("Asignatura", "Subject"),
                enum_options(Subject::all(), Subject::code, Subject::label, lang),
            ),
            FilterDef::new(
                FILTER_KIND,
                lang.pick("Tipo", "Type"),
                enum_options(AbsenceKind::all(), AbsenceKind::code, AbsenceKind::label, lang),
            ),
        ]
    });

    view! {
        <PageFrame page_id="a001_absence--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Faltas de asistencia", "Absences")}</h1>
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
                                <TableHeaderCell>{move || lang.get().pick("Fecha", "Date")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Sesión", "Period")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Asignatura", "Subject")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Tipo", "Type")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Estado", "Status")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Observaciones", "Notes")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|a| a.id.clone()
                                children=move |absence| {
                                    let date = absence.date;
                                    let subject = absence.subject;
                                    let kind = absence.kind;
                                    let status = absence.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{move || format_date(date, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{}ª", absence.period)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || subject.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || kind.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{move || status.label(lang.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{absence.note.clone().unwrap_or_default()}</TableCellLayout>
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
