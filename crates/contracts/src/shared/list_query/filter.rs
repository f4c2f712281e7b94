use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Value of one filter: `All` lets every record through
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    #[default]
    All,
    Exact(String),
}

static ALL: FilterValue = FilterValue::All;

impl FilterValue {
    /// Code of the `All` option in a filter dropdown
    pub const ALL_CODE: &'static str = "all";

    /// Map a dropdown option code to a filter value
    pub fn from_code(code: &str) -> Self {
        if code == Self::ALL_CODE {
            FilterValue::All
        } else {
            FilterValue::Exact(code.to_string())
        }
    }

    pub fn exact(value: impl Into<String>) -> Self {
        FilterValue::Exact(value.into())
    }

    pub fn code(&self) -> &str {
        match self {
            FilterValue::All => Self::ALL_CODE,
            FilterValue::Exact(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Case-sensitive equality; a missing field never matches a concrete value.
    pub fn matches(&self, field: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Exact(expected) => field == Some(expected.as_str()),
        }
    }
}

/// Record whose fields can be addressed by filter key
pub trait Filterable {
    /// Value of the field behind `key`, `None` if the record has no such field
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Ordered set of active filter selections of a page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec with every key present and set to `All`
    pub fn with_keys(keys: &[&str]) -> Self {
        Self {
            entries: keys
                .iter()
                .map(|key| (key.to_string(), FilterValue::All))
                .collect(),
        }
    }

    pub fn with(mut self, key: &str, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: FilterValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, current)) => *current = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> &FilterValue {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or(&ALL)
    }

    /// Keys stay, values go back to `All`
    pub fn reset(&mut self) {
        for (_, value) in self.entries.iter_mut() {
            *value = FilterValue::All;
        }
    }

    /// Non-`All` selections in declaration order
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            FilterValue::All => None,
            FilterValue::Exact(value) => Some((k.as_str(), value.as_str())),
        })
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Logical AND of every filter
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.entries.iter().all(|(key, value)| {
            value.is_all() || value.matches(record.filter_value(key).as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        status: &'static str,
        subject: Option<&'static str>,
    }

    impl Filterable for Row {
        fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
            match key {
                "status" => Some(Cow::Borrowed(self.status)),
                "subject" => self.subject.map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let spec = FilterSpec::with_keys(&["status", "subject", "unknown"]);
        let row = Row { status: "justified", subject: None };
        assert!(spec.matches(&row));
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let spec = FilterSpec::new().with("status", FilterValue::exact("justified"));
        assert!(spec.matches(&Row { status: "justified", subject: None }));
        assert!(!spec.matches(&Row { status: "Justified", subject: None }));
    }

    #[test]
    fn test_filters_are_anded() {
        let spec = FilterSpec::new()
            .with("status", FilterValue::exact("justified"))
            .with("subject", FilterValue::exact("music"));
        assert!(spec.matches(&Row { status: "justified", subject: Some("music") }));
        assert!(!spec.matches(&Row { status: "justified", subject: Some("art") }));
        assert!(!spec.matches(&Row { status: "pending", subject: Some("music") }));
    }

    #[test]
    fn test_missing_field_never_matches_concrete_value() {
        let spec = FilterSpec::new().with("subject", FilterValue::exact("music"));
        assert!(!spec.matches(&Row { status: "justified", subject: None }));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut spec = FilterSpec::with_keys(&["status", "subject"]);
        spec.set("subject", FilterValue::exact("art"));
        spec.set("status", FilterValue::exact("pending"));
        spec.set("subject", FilterValue::All);
        assert_eq!(spec.active().collect::<Vec<_>>(), vec![("status", "pending")]);
        assert_eq!(spec.active_count(), 1);
    }

    #[test]
    fn test_reset_and_codes() {
        let mut spec = FilterSpec::with_keys(&["status"]);
        spec.set("status", FilterValue::from_code("pending"));
        assert_eq!(spec.get("status").code(), "pending");
        spec.reset();
        assert!(spec.is_empty());
        assert_eq!(spec.get("status"), &FilterValue::All);
        assert_eq!(spec.get("missing").code(), FilterValue::ALL_CODE);
        assert_eq!(FilterValue::from_code("all"), FilterValue::All);
    }
}
