use contracts::domain::a003_message::{Message, FILTER_CATEGORY, FILTER_STATUS};
use contracts::shared::list_query::{ListViewState, PageSize, SortSpec};
use leptos::prelude::*;

pub const PAGE_SIZE: PageSize = PageSize::new(6);

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new(&[FILTER_CATEGORY, FILTER_STATUS]))
}

/// Inbox order: most recently received first
pub fn newest_first() -> SortSpec<Message> {
    SortSpec::new(|a: &Message, b: &Message| b.received_at.cmp(&a.received_at))
}
