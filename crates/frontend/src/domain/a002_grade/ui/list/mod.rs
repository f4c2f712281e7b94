mod state;

use contracts::domain::a002_grade::{
    average_score, data, Grade, GradeKind, Term, FILTER_KIND, FILTER_SUBJECT, FILTER_TERM,
    SORT_ASSESSMENT, SORT_DATE, SORT_SCORE, SORT_SUBJECT,
};
use contracts::enums::Subject;
use contracts::shared::dataset::DatasetProvider;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{ActiveFilterTags, FilterDef, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_score};
use crate::shared::i18n::use_language;
use crate::shared::list_utils::{enum_options, SortableHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, PAGE_SIZE};

#[component]
pub fn GradeList() -> impl IntoView {
    let lang = use_language();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let dataset = data::dataset();

    let page = Memo::new(move |_| state.with(|s| s.query_sorted(&dataset, PAGE_SIZE)));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    // Среднее по всем отфильтрованным оценкам, а не только по видимой странице
    let filtered_average = Memo::new(move |_| {
        state.with(|s| {
            let filtered: Vec<Grade> = dataset
                .records()
                .iter()
                .filter(|g| s.filters.matches(*g))
                .cloned()
                .collect();
            average_score(&filtered)
        })
    });

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_SUBJECT,
                lang.pick("Asignatura", "Subject"),
                enum_options(Subject::all(), Subject::code, Subject::label, lang),
            ),
            FilterDef::new(
                FILTER_TERM,
                lang.pick("Evaluación", "Term"),
                enum_options(Term::all(), Term::code, Term::label, lang),
            ),
            FilterDef::new(
                FILTER_KIND,
                lang.pick("Tipo de prueba", "Assessment type"),
                enum_options(GradeKind::all(), GradeKind::code, GradeKind::label, lang),
            ),
        ]
    });

    let header = move |es: &'static str, en: &'static str| {
        Signal::derive(move || lang.get().pick(es, en).to_string())
    };

    view! {
        <PageFrame page_id="a002_grade--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Calificaciones", "Grades")}</h1>
                    <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__header-stat">
                        {move || lang.get().pick("Nota media", "Average")}
                        ": "
                        <strong>
                            {move || filtered_average
                                .get()
                                .map(|avg| format_score(avg, lang.get()))
                                .unwrap_or_else(|| "-".to_string())}
                        </strong>
                    </span>
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
                                    <SortableHeader state=state field=SORT_DATE label=header("Fecha", "Date") />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_SUBJECT label=header("Asignatura", "Subject") />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_ASSESSMENT label=header("Prueba", "Assessment") />
                                </TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Evaluación", "Term")}</TableHeaderCell>
                                <TableHeaderCell>
                                    <SortableHeader state=state field=SORT_SCORE label=header("Nota", "Score") />
                                </TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Profesor", "Teacher")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|g| g.id.clone()
                                children=move |grade| {
                                    let date = grade.date;
                                    let subject = grade.subject;
                                    let term = grade.term;
                                    let kind = grade.kind;
                                    let score = grade.score;
                                    let passing = grade.is_passing();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{move || format_date(date, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || subject.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{grade.assessment.clone()}</span>
                                                    <span class="text-muted">" · " {move || kind.label(lang.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || term.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=if passing { "badge badge--success" } else { "badge badge--error" }>
                                                        {move || format_score(score, lang.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{grade.teacher.clone()}</TableCellLayout>
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
