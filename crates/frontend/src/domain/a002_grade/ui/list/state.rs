use contracts::domain::a002_grade::{FILTER_KIND, FILTER_SUBJECT, FILTER_TERM, SORT_DATE};
use contracts::shared::list_query::{ListViewState, PageSize};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(8);

/// Newest assessments first until a header is clicked
pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(
        ListViewState::new(&[FILTER_SUBJECT, FILTER_TERM, FILTER_KIND]).with_sort(SORT_DATE, false),
    )
}
