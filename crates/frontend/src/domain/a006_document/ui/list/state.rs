use contracts::domain::a006_document::{FILTER_CATEGORY, FILTER_YEAR, SORT_ISSUED_ON};
use contracts::shared::list_query::{ListViewState, PageSize};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(8);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_CATEGORY, FILTER_YEAR]).with_sort(SORT_ISSUED_ON, false))
}
