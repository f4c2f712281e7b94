//! Query-string helpers (`?lang=en&roles=teacher,parent`)

use std::collections::HashMap;
use web_sys::window;

pub const PARAM_LANG: &str = "lang";
pub const PARAM_ROLES: &str = "roles";

/// Parse a raw `location.search` value; malformed input yields no params
pub fn parse_query(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Parameters of the current browser location
pub fn current_query() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

/// Comma separated role tags from `?roles=`, `None` when the param is absent
pub fn role_override(params: &HashMap<String, String>) -> Option<Vec<String>> {
    params.get(PARAM_ROLES).map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_strips_question_mark() {
        let params = parse_query("?lang=en-US&roles=teacher");
        assert_eq!(params.get(PARAM_LANG).map(String::as_str), Some("en-US"));
        assert_eq!(params.get(PARAM_ROLES).map(String::as_str), Some("teacher"));
    }

    #[test]
    fn test_empty_search() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_role_override_splits_and_trims() {
        let params = parse_query("?roles=teacher,%20parent,,");
        assert_eq!(
            role_override(&params),
            Some(vec!["teacher".to_string(), "parent".to_string()])
        );
    }

    #[test]
    fn test_role_override_absent() {
        let params = parse_query("?lang=es");
        assert_eq!(role_override(&params), None);
    }

    #[test]
    fn test_empty_role_override_means_no_roles() {
        let params = parse_query("?roles=");
        assert_eq!(role_override(&params), Some(Vec::new()));
    }
}
