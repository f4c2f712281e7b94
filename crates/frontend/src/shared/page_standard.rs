//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_absence--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: the id copied from
//! the DOM inspector leads straight to `domain/a001_absence/`.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / summary view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// A page id whose `--` suffix is the recognised category it declares.
pub fn page_id_matches_category(id: &str, category: &str) -> bool {
    is_known_category(category)
        && is_valid_page_id(id)
        && id.rsplit_once("--").is_some_and(|(_, suffix)| suffix == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_absence--list"));
        assert!(is_valid_page_id("d100_overview--dashboard"));
        assert!(!is_valid_page_id("a001_absence"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_absence--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("legacy"));
    }

    #[test]
    fn test_page_id_matches_category() {
        assert!(page_id_matches_category("a001_absence--list", PAGE_CAT_LIST));
        assert!(page_id_matches_category("sys_settings--system", PAGE_CAT_SYSTEM));
        assert!(!page_id_matches_category("a001_absence--list", PAGE_CAT_DASHBOARD));
        assert!(!page_id_matches_category("a001_absence--legacy", "legacy"));
        assert!(!page_id_matches_category("a001_absence", PAGE_CAT_LIST));
    }
}
