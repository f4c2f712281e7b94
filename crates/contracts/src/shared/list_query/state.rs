use super::filter::{FilterSpec, FilterValue, Filterable};
use super::page::PageSize;
use super::query::{query, ListPage};
use super::sort::{SortSpec, Sortable};
use crate::shared::dataset::DatasetProvider;
use serde::{Deserialize, Serialize};

/// Current column sort of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub ascending: bool,
}

/// Page-local list state: filter selections, requested page, the single
/// open filter dropdown and an optional column sort.
///
/// Any filter or sort change sends the page back to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    pub filters: FilterSpec,
    pub page: usize,
    pub open_filter: Option<String>,
    pub sort: Option<SortKey>,
}

impl ListViewState {
    pub fn new(filter_keys: &[&str]) -> Self {
        Self {
            filters: FilterSpec::with_keys(filter_keys),
            page: 1,
            open_filter: None,
            sort: None,
        }
    }

    pub fn with_sort(mut self, field: &str, ascending: bool) -> Self {
        self.sort = Some(SortKey {
            field: field.to_string(),
            ascending,
        });
        self
    }

    pub fn set_filter(&mut self, key: &str, value: FilterValue) {
        self.filters.set(key, value);
        self.page = 1;
        self.open_filter = None;
    }

    pub fn clear_filters(&mut self) {
        self.filters.reset();
        self.page = 1;
        self.open_filter = None;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Open `id`, or close it if it is the one already open
    pub fn toggle_dropdown(&mut self, id: &str) {
        if self.open_filter.as_deref() == Some(id) {
            self.open_filter = None;
        } else {
            self.open_filter = Some(id.to_string());
        }
    }

    /// Close whatever dropdown is open; filters and page stay as they are
    pub fn close_dropdown(&mut self) {
        self.open_filter = None;
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_filter.as_deref() == Some(id)
    }

    /// Same field flips direction, a new field starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        match self.sort.as_mut() {
            Some(key) if key.field == field => key.ascending = !key.ascending,
            _ => {
                self.sort = Some(SortKey {
                    field: field.to_string(),
                    ascending: true,
                })
            }
        }
        self.page = 1;
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Run the pipeline with an explicit comparator (or none)
    pub fn query<T, D>(&self, dataset: &D, sort: Option<&SortSpec<T>>, page_size: PageSize) -> ListPage<T>
    where
        T: Filterable + Clone + 'static,
        D: DatasetProvider<T> + ?Sized,
    {
        query(dataset.records(), &self.filters, sort, self.page, page_size)
    }

    /// Run the pipeline with the column sort held in this state
    pub fn query_sorted<T, D>(&self, dataset: &D, page_size: PageSize) -> ListPage<T>
    where
        T: Filterable + Sortable + Clone + 'static,
        D: DatasetProvider<T> + ?Sized,
    {
        let sort = self
            .sort
            .as_ref()
            .map(|key| SortSpec::by_field(key.field.clone(), key.ascending));
        query(dataset.records(), &self.filters, sort.as_ref(), self.page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ListViewState::new(&["status", "subject"]);
        assert_eq!(state.page, 1);
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.open_filter.is_none());
        assert!(state.sort.is_none());
    }

    #[test]
    fn test_filter_change_resets_page_and_closes_dropdown() {
        let mut state = ListViewState::new(&["status"]);
        state.go_to_page(4);
        state.toggle_dropdown("status");
        state.set_filter("status", FilterValue::exact("justified"));
        assert_eq!(state.page, 1);
        assert!(state.open_filter.is_none());
        assert_eq!(state.active_filter_count(), 1);

        state.go_to_page(2);
        state.clear_filters();
        assert_eq!(state.page, 1);
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_single_open_dropdown() {
        let mut state = ListViewState::new(&["status", "subject"]);
        state.toggle_dropdown("status");
        assert!(state.is_open("status"));
        state.toggle_dropdown("subject");
        assert!(state.is_open("subject"));
        assert!(!state.is_open("status"));
        state.toggle_dropdown("subject");
        assert!(state.open_filter.is_none());
    }

    #[test]
    fn test_close_dropdown_keeps_selection() {
        let mut state = ListViewState::new(&["status"]);
        state.set_filter("status", FilterValue::exact("pending"));
        state.go_to_page(2);
        state.toggle_dropdown("status");
        state.close_dropdown();
        assert!(state.open_filter.is_none());
        assert_eq!(state.page, 2);
        assert_eq!(state.active_filter_count(), 1);
        state.close_dropdown();
        assert!(state.open_filter.is_none());
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ListViewState::new(&[]).with_sort("date", false);
        state.go_to_page(3);
        state.toggle_sort("date");
        assert_eq!(state.sort, Some(SortKey { field: "date".into(), ascending: true }));
        assert_eq!(state.page, 1);
        state.toggle_sort("score");
        assert_eq!(state.sort, Some(SortKey { field: "score".into(), ascending: true }));
    }
}
