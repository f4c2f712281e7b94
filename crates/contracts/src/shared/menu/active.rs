use super::item::MenuItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A leaf is active iff its href equals the current path exactly.
/// Items with children are never active themselves.
pub fn is_active(item: &MenuItem, current_path: &str) -> bool {
    item.is_leaf() && item.href.as_deref() == Some(current_path)
}

/// First active leaf in depth-first declaration order
pub fn find_active<'a>(items: &'a [MenuItem], current_path: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if is_active(item, current_path) {
            Some(item)
        } else {
            find_active(&item.children, current_path)
        }
    })
}

/// Names of the ancestors of the active leaf, outermost first.
/// Empty when nothing in the tree matches `current_path`.
pub fn active_trail<'a>(items: &'a [MenuItem], current_path: &str) -> Vec<&'a str> {
    let mut trail = Vec::new();
    collect_trail(items, current_path, &mut trail);
    trail
}

fn collect_trail<'a>(items: &'a [MenuItem], current_path: &str, trail: &mut Vec<&'a str>) -> bool {
    for item in items {
        if is_active(item, current_path) {
            return true;
        }
        trail.push(item.name.as_str());
        if collect_trail(&item.children, current_path, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

/// Sidebar expand/collapse state, keyed by group name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedGroups(BTreeSet<String>);

impl ExpandedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn expand(&mut self, name: &str) -> bool {
        self.0.insert(name.to_string())
    }

    /// Returns the new state: `true` when the group is now expanded
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(name.to_string());
            true
        }
    }

    /// Expand every group on the active trail. Never collapses anything.
    /// Returns how many groups were newly expanded.
    pub fn auto_expand(&mut self, items: &[MenuItem], current_path: &str) -> usize {
        active_trail(items, current_path)
            .into_iter()
            .filter(|name| self.expand(name))
            .count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::label::Label;

    fn link(name: &str, href: &str) -> MenuItem {
        MenuItem::link(name, Label::new(name, name), href)
    }

    fn tree() -> Vec<MenuItem> {
        vec![
            link("home", "/"),
            MenuItem::group("academic", Label::new("a", "a"), vec![
                link("grades", "/grades"),
                MenuItem::group("reports", Label::new("r", "r"), vec![
                    link("term", "/reports/term"),
                ]),
            ]),
            MenuItem::group("communication", Label::new("c", "c"), vec![
                link("messages", "/messages"),
            ]),
        ]
    }

    #[test]
    fn test_exact_match_only() {
        let items = tree();
        assert!(is_active(&items[0], "/"));
        assert!(!is_active(&items[0], "/grades"));
        let grades = &items[1].children[0];
        assert!(is_active(grades, "/grades"));
        assert!(!is_active(grades, "/grades/"));
        assert!(!is_active(grades, "/grades/2"));
    }

    #[test]
    fn test_group_never_active() {
        let mut group = tree().remove(1);
        group.href = Some("/academic".into());
        assert!(!is_active(&group, "/academic"));
    }

    #[test]
    fn test_active_trail() {
        let items = tree();
        assert_eq!(active_trail(&items, "/reports/term"), vec!["academic", "reports"]);
        assert_eq!(active_trail(&items, "/messages"), vec!["communication"]);
        assert!(active_trail(&items, "/").is_empty());
        assert!(active_trail(&items, "/missing").is_empty());
        assert_eq!(find_active(&items, "/reports/term").map(|i| i.name.as_str()), Some("term"));
    }

    #[test]
    fn test_auto_expand_never_collapses() {
        let items = tree();
        let mut expanded = ExpandedGroups::new();
        expanded.expand("communication");

        assert_eq!(expanded.auto_expand(&items, "/reports/term"), 2);
        assert!(expanded.contains("academic"));
        assert!(expanded.contains("reports"));
        assert!(expanded.contains("communication"));

        assert_eq!(expanded.auto_expand(&items, "/"), 0);
        assert_eq!(expanded.len(), 3);
    }

    #[test]
    fn test_toggle() {
        let mut expanded = ExpandedGroups::new();
        assert!(expanded.toggle("academic"));
        assert!(!expanded.toggle("academic"));
        assert!(expanded.is_empty());
    }
}
