use contracts::domain::a005_calendar_event::{CalendarEvent, FILTER_KIND, FILTER_MONTH};
use contracts::shared::list_query::{ListViewState, PageSize, SortSpec};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(5);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_KIND, FILTER_MONTH]))
}

/// Chronological: by date, all-day events before timed ones
pub fn chronological() -> SortSpec<CalendarEvent> {
    SortSpec::new(|a: &CalendarEvent, b: &CalendarEvent| {
        (a.date, a.start_time).cmp(&(b.date, b.start_time))
    })
}
