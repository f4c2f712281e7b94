use contracts::domain::a001_absence::{FILTER_KIND, FILTER_STATUS, FILTER_SUBJECT};
use contracts::shared::list_query::{ListViewState, PageSize};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(10);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_STATUS, FILTER_SUBJECT, FILTER_KIND]))
}
