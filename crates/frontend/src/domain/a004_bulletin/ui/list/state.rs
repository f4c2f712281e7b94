use contracts::domain::a004_bulletin::{FILTER_AUDIENCE, FILTER_CATEGORY};
use contracts::shared::list_query::{ListViewState, PageSize};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(6);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_CATEGORY, FILTER_AUDIENCE]))
}
