use super::catalog::MenuCatalog;
use super::item::MenuItem;
use crate::enums::RoleSet;

/// Build the navigation tree offered to a user with `active_roles`.
///
/// Common items come first in declared order, followed by the role-specific
/// items whose roles intersect `active_roles`, also in declared order.
/// Children with their own role sets are filtered by the same rule; groups
/// stay even when that leaves them empty. This only decides what is
/// offered; access control lives with the identity provider.
pub fn resolve_menu(catalog: &MenuCatalog, active_roles: &RoleSet) -> Vec<MenuItem> {
    let resolved: Vec<MenuItem> = catalog
        .common()
        .iter()
        .chain(
            catalog
                .role_specific()
                .iter()
                .filter(|item| item.is_visible_to(active_roles)),
        )
        .map(|item| visible_subtree(item, active_roles))
        .collect();

    log::debug!(
        "resolved menu: {} items for roles {:?}",
        resolved.len(),
        active_roles
    );
    resolved
}

fn visible_subtree(item: &MenuItem, active_roles: &RoleSet) -> MenuItem {
    MenuItem {
        children: item
            .children
            .iter()
            .filter(|child| child.is_visible_to(active_roles))
            .map(|child| visible_subtree(child, active_roles))
            .collect(),
        ..item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Role;
    use crate::shared::label::Label;

    fn link(name: &str) -> MenuItem {
        MenuItem::link(name, Label::new(name, name), &format!("/{name}"))
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(
            vec![
                link("home"),
                MenuItem::group("academic", Label::new("Académico", "Academic"), vec![
                    link("grades"),
                    link("register").with_roles([Role::Teacher]),
                ]),
            ],
            vec![
                link("homework").with_roles([Role::Student, Role::Parent]),
                link("users").with_roles([Role::Administrator]),
                link("timetable").with_roles([Role::Teacher, Role::Administrator]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_no_roles_returns_common_only() {
        let menu = resolve_menu(&catalog(), &RoleSet::new());
        assert_eq!(names(&menu), vec!["home", "academic"]);
        assert_eq!(names(&menu[1].children), vec!["grades"]);
    }

    #[test]
    fn test_administrator() {
        let roles = RoleSet::from([Role::Administrator]);
        let menu = resolve_menu(&catalog(), &roles);
        assert_eq!(names(&menu), vec!["home", "academic", "users", "timetable"]);
    }

    #[test]
    fn test_declaration_order_not_role_order() {
        let roles = RoleSet::from([Role::Administrator, Role::Parent, Role::Teacher]);
        let menu = resolve_menu(&catalog(), &roles);
        assert_eq!(
            names(&menu),
            vec!["home", "academic", "homework", "users", "timetable"]
        );
        assert_eq!(names(&menu[1].children), vec!["grades", "register"]);
    }

    #[test]
    fn test_deterministic() {
        let roles = RoleSet::from([Role::Teacher]);
        assert_eq!(resolve_menu(&catalog(), &roles), resolve_menu(&catalog(), &roles));
    }
}
