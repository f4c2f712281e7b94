use super::error::ListQueryError;
use serde::{Deserialize, Serialize};

/// List page size, always > 0.
///
/// Page sizes are fixed per page type, so the zero check runs when the
/// constant is evaluated: `const SIZE: PageSize = PageSize::new(10);`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const fn new(size: usize) -> Self {
        assert!(size > 0, "page size must be positive");
        Self(size)
    }

    pub fn try_new(size: usize) -> Result<Self, ListQueryError> {
        if size == 0 {
            Err(ListQueryError::ZeroPageSize)
        } else {
            Ok(Self(size))
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ListQueryError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::try_new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

/// `max(1, ceil(total_count / page_size))`
pub fn total_pages(total_count: usize, page_size: PageSize) -> usize {
    total_count.div_ceil(page_size.get()).max(1)
}

/// Clamp a raw 1-based page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Pagination metadata without the items, for rendering controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSummary {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl PageSummary {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let size = PageSize::new(10);
        assert_eq!(total_pages(0, size), 1);
        assert_eq!(total_pages(1, size), 1);
        assert_eq!(total_pages(10, size), 1);
        assert_eq!(total_pages(11, size), 2);
        assert_eq!(total_pages(12, size), 2);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(999_999, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(PageSize::try_new(0), Err(ListQueryError::ZeroPageSize));
        assert_eq!(PageSize::try_new(6).map(PageSize::get), Ok(6));
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert_eq!(serde_json::from_str::<PageSize>("8").unwrap().get(), 8);
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn test_zero_page_size_asserts() {
        let _ = PageSize::new(0);
    }
}
