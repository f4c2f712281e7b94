use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Record that can be pinned to the top of a list (bulletin-style pages)
pub trait Pinnable {
    fn is_pinned(&self) -> bool;

    /// Date used as the secondary, descending key
    fn sort_date(&self) -> NaiveDateTime;
}

/// Records that can be compared by a named field
pub trait Sortable {
    /// Compare two records by `field`
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Comparator applied before pagination. The sort is stable: records the
/// comparator reports as equal keep their dataset order.
pub struct SortSpec<T> {
    compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T> fmt::Debug for SortSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSpec").finish_non_exhaustive()
    }
}

impl<T: 'static> SortSpec<T> {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Stable in-place sort
    pub fn sort(&self, items: &mut [&T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<T: Pinnable + 'static> SortSpec<T> {
    /// Pinned first, then newest first
    pub fn pinned_then_date_desc() -> Self {
        Self::new(|a: &T, b: &T| {
            b.is_pinned()
                .cmp(&a.is_pinned())
                .then_with(|| b.sort_date().cmp(&a.sort_date()))
        })
    }
}

impl<T: Sortable + 'static> SortSpec<T> {
    pub fn by_field(field: impl Into<String>, ascending: bool) -> Self {
        let field = field.into();
        Self::new(move |a: &T, b: &T| {
            let cmp = a.compare_by_field(b, &field);
            if ascending { cmp } else { cmp.reverse() }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, PartialEq)]
    struct Post {
        id: u32,
        pinned: bool,
        day: u32,
    }

    impl Pinnable for Post {
        fn is_pinned(&self) -> bool {
            self.pinned
        }

        fn sort_date(&self) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 10, self.day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        }
    }

    impl Sortable for Post {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "day" => self.day.cmp(&other.day),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn ids(items: &[&Post]) -> Vec<u32> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_pinned_then_date_desc() {
        let posts = vec![
            Post { id: 1, pinned: false, day: 20 },
            Post { id: 2, pinned: true, day: 1 },
            Post { id: 3, pinned: false, day: 25 },
            Post { id: 4, pinned: true, day: 5 },
        ];
        let mut refs: Vec<&Post> = posts.iter().collect();
        SortSpec::pinned_then_date_desc().sort(&mut refs);
        assert_eq!(ids(&refs), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let posts = vec![
            Post { id: 1, pinned: false, day: 3 },
            Post { id: 2, pinned: false, day: 3 },
            Post { id: 3, pinned: true, day: 3 },
            Post { id: 4, pinned: false, day: 3 },
            Post { id: 5, pinned: true, day: 3 },
        ];
        let mut refs: Vec<&Post> = posts.iter().collect();
        SortSpec::pinned_then_date_desc().sort(&mut refs);
        assert_eq!(ids(&refs), vec![3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_by_field_descending_is_stable() {
        let posts = vec![
            Post { id: 1, pinned: false, day: 2 },
            Post { id: 2, pinned: false, day: 9 },
            Post { id: 3, pinned: false, day: 2 },
        ];
        let mut refs: Vec<&Post> = posts.iter().collect();
        SortSpec::by_field("day", false).sort(&mut refs);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }
}
