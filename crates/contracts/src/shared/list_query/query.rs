use super::filter::{FilterSpec, Filterable};
use super::page::{clamp_page, total_pages, PageSize, PageSummary};
use super::sort::SortSpec;
use serde::Serialize;

/// One rendered page of a filtered (and optionally sorted) dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Filtered length before pagination
    pub total_count: usize,
    pub total_pages: usize,
    /// Page after clamping, 1-based
    pub page: usize,
    pub page_size: usize,
    /// 1-based first row shown ("Showing X"), 0 when nothing matched
    pub start_index: usize,
    /// 1-based last row shown ("to Y"), 0 when nothing matched
    pub end_index: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page: self.page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// Filter, sort and paginate `dataset`.
///
/// `page` comes straight from UI state and is clamped into
/// `[1, total_pages]` before slicing. The dataset is only borrowed; the
/// returned items are clones of the matching records.
pub fn query<T>(
    dataset: &[T],
    filters: &FilterSpec,
    sort: Option<&SortSpec<T>>,
    page: usize,
    page_size: PageSize,
) -> ListPage<T>
where
    T: Filterable + Clone + 'static,
{
    let mut matched: Vec<&T> = dataset
        .iter()
        .filter(|record| filters.matches(*record))
        .collect();

    if let Some(sort) = sort {
        sort.sort(&mut matched);
    }

    let size = page_size.get();
    let total_count = matched.len();
    let total_pages = total_pages(total_count, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * size).min(total_count);
    let end = (page * size).min(total_count);
    let items: Vec<T> = matched[start..end].iter().map(|r| (*r).clone()).collect();

    let start_index = if total_count == 0 { 0 } else { start + 1 };

    ListPage {
        items,
        total_count,
        total_pages,
        page,
        page_size: size,
        start_index,
        end_index: end,
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::FilterValue;
    use super::super::sort::Pinnable;
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        kind: &'static str,
        pinned: bool,
        day: u32,
    }

    impl Filterable for Row {
        fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
            match key {
                "kind" => Some(Cow::Borrowed(self.kind)),
                _ => None,
            }
        }
    }

    impl Pinnable for Row {
        fn is_pinned(&self) -> bool {
            self.pinned
        }

        fn sort_date(&self) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 9, self.day)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|id| Row {
                id,
                kind: if id % 3 == 0 { "a" } else { "b" },
                pinned: false,
                day: 1 + (id as u32 % 28),
            })
            .collect()
    }

    #[test]
    fn test_empty_dataset() {
        let page = query::<Row>(&[], &FilterSpec::new(), None, 1, PageSize::new(10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 0);
    }

    #[test]
    fn test_unmatched_filter_is_empty_not_error() {
        let filters = FilterSpec::new().with("kind", FilterValue::exact("zzz"));
        let page = query(&rows(7), &filters, None, 3, PageSize::new(5));
        assert!(page.is_empty());
        assert_eq!(page.summary(), PageSummary {
            page: 1,
            total_pages: 1,
            total_count: 0,
            start_index: 0,
            end_index: 0,
        });
    }

    #[test]
    fn test_slice_bounds() {
        let data = rows(23);
        let page = query(&data, &FilterSpec::new(), None, 3, PageSize::new(10));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.start_index, 21);
        assert_eq!(page.end_index, 23);
        assert_eq!(page.items[0].id, 20);
    }

    #[test]
    fn test_page_is_clamped() {
        let data = rows(23);
        let size = PageSize::new(10);
        let last = query(&data, &FilterSpec::new(), None, 3, size);
        let huge = query(&data, &FilterSpec::new(), None, 999_999, size);
        assert_eq!(huge.items, last.items);
        assert_eq!(huge.page, 3);

        let zero = query(&data, &FilterSpec::new(), None, 0, size);
        let first = query(&data, &FilterSpec::new(), None, 1, size);
        assert_eq!(zero, first);
    }

    #[test]
    fn test_filter_then_paginate() {
        let data = rows(30);
        let filters = FilterSpec::new().with("kind", FilterValue::exact("a"));
        let page = query(&data, &filters, None, 2, PageSize::new(6));
        assert_eq!(page.total_count, 10);
        assert_eq!(page.total_pages, 2);
        let ids: Vec<usize> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![18, 21, 24, 27]);
    }

    #[test]
    fn test_sort_applies_before_pagination_without_touching_dataset() {
        let mut data = rows(8);
        data[6].pinned = true;
        let snapshot = data.clone();
        let sort = SortSpec::pinned_then_date_desc();
        let page = query(&data, &FilterSpec::new(), Some(&sort), 1, PageSize::new(3));
        let ids: Vec<usize> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7, 5]);
        assert_eq!(data, snapshot);
    }
}
