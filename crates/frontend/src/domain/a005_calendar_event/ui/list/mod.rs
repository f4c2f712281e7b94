mod state;

use contracts::domain::a005_calendar_event::{
    available_months, data, CalendarEvent, EventKind, FILTER_KIND, FILTER_MONTH,
};
use leptos::prelude::*;
use thaw::*;

use super::create::CalendarEventForm;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{
    ActiveFilterTags, FilterDef, FilterOption, ListFilters,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_month_code, format_time};
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::list_utils::enum_options;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{chronological, create_state, PAGE_SIZE};

#[component]
pub fn CalendarEventList() -> impl IntoView {
    let lang = use_language();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let show_form = RwSignal::new(false);
    let sort = chronological();

    // Events created during this session, kept in front of the static calendar
    let created = RwSignal::new(Vec::<CalendarEvent>::new());
    let events = Memo::new(move |_| {
        let mut all = created.get();
        all.extend_from_slice(data::dataset().all());
        all
    });

    let page = Memo::new(move |_| events.with(|list| state.with(|s| s.query(list, Some(&sort), PAGE_SIZE))));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        let months = events.with(|list| available_months(list));
        vec![
            FilterDef::new(
                FILTER_KIND,
                lang.pick("Tipo", "Type"),
                enum_options(EventKind::all(), EventKind::code, EventKind::label, lang),
            ),
            FilterDef::new(
                FILTER_MONTH,
                lang.pick("Mes", "Month"),
                months
                    .iter()
                    .map(|code| FilterOption::new(code.clone(), format_month_code(code, lang)))
                    .collect(),
            ),
        ]
    });

    let on_created = Callback::new(move |event: CalendarEvent| {
        log::info!("Calendar event created: {} on {}", event.title, event.date);
        created.update(|list| list.push(event));
        show_form.set(false);
    });

    view! {
        <PageFrame page_id="a005_calendar_event--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Calendario", "Calendar")}</h1>
                    <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_form.update(|open| *open = !*open)
                    >
                        {icon("plus")}
                        {move || lang.get().pick(" Nuevo evento", " New event")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || show_form.get()>
                    <CalendarEventForm
                        on_created=on_created
                        on_cancel=Callback::new(move |_| show_form.set(false))
                    />
                </Show>

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
                                <TableHeaderCell>{move || lang.get().pick("Hora", "Time")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Evento", "Event")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Tipo", "Type")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Lugar", "Location")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|e| e.id.clone()
                                children=move |event| {
                                    let date = event.date;
                                    let start_time = event.start_time;
                                    let kind = event.kind;
                                    view! {
                                        <TableRow class:table__row--new=event.created_by_user>
                                            <TableCell>
                                                <TableCellLayout>{move || format_date(date, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || match start_time {
                                                        Some(time) => format_time(time, lang.get()),
                                                        None => lang.get().pick("Todo el día", "All day").to_string(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{event.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || kind.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {event.location.clone().map(|place| view! {
                                                        {icon("map-pin")}
                                                        <span>{place}</span>
                                                    })}
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
