mod state;

use contracts::domain::a007_homework::{data, HomeworkStatus, FILTER_STATUS, FILTER_SUBJECT};
use contracts::enums::Subject;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{ActiveFilterTags, FilterDef, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::Config;
use crate::shared::date_utils::{format_date, format_score};
use crate::shared::i18n::use_language;
use crate::shared::list_utils::enum_options;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{by_due_date, create_state, PAGE_SIZE};

fn status_badge_class(status: HomeworkStatus) -> &'static str {
    match status {
        HomeworkStatus::Pending => "badge badge--warning",
        HomeworkStatus::Submitted => "badge badge--primary",
        HomeworkStatus::Graded => "badge badge--success",
        HomeworkStatus::Late => "badge badge--error",
    }
}

#[component]
pub fn HomeworkList() -> impl IntoView {
    let lang = use_language();
    let config = use_context::<Config>().expect("Config context not found");
    let today = config.today();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let sort = by_due_date();

    let page = Memo::new(move |_| state.with(|s| s.query(&data::dataset(), Some(&sort), PAGE_SIZE)));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_SUBJECT,
                lang.pick("Asignatura", "Subject"),
                enum_options(Subject::all(), Subject::code, Subject::label, lang),
            ),
            FilterDef::new(
                FILTER_STATUS,
                lang.pick("Estado", "Status"),
                enum_options(HomeworkStatus::all(), HomeworkStatus::code, HomeworkStatus::label, lang),
            ),
        ]
    });

    view! {
        <PageFrame page_id="a007_homework--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Deberes", "Homework")}</h1>
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
                                <TableHeaderCell>{move || lang.get().pick("Entrega", "Due")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Asignatura", "Subject")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Tarea", "Assignment")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Estado", "Status")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Nota", "Score")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|h| h.id.clone()
                                children=move |homework| {
                                    let due_on = homework.due_on;
                                    let subject = homework.subject;
                                    let status = homework.status;
                                    let score = homework.score;
                                    let overdue = homework.is_overdue(today);
                                    view! {
                                        <TableRow class:table__row--overdue=overdue>
                                            <TableCell>
                                                <TableCellLayout>{move || format_date(due_on, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || subject.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{homework.title.clone()}</span>
                                                    <span class="text-muted">" · " {homework.description.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{move || status.label(lang.get())}</span>
                                                    {overdue.then(|| view! {
                                                        <span class="badge badge--error">
                                                            {move || lang.get().pick("Vencida", "Overdue")}
                                                        </span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || score
                                                        .map(|s| format_score(s, lang.get()))
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
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
