use contracts::domain::a007_homework::{Homework, FILTER_STATUS, FILTER_SUBJECT};
use contracts::shared::list_query::{ListViewState, PageSize, SortSpec};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(5);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_SUBJECT, FILTER_STATUS]))
}

/// Nearest due date first
pub fn by_due_date() -> SortSpec<Homework> {
    SortSpec::new(|a: &Homework, b: &Homework| a.due_on.cmp(&b.due_on))
}
