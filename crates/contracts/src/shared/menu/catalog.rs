use super::item::MenuItem;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("role-specific menu item '{name}' has no roles")]
    UngatedRoleItem { name: String },

    #[error("common menu item '{name}' must not carry roles")]
    GatedCommonItem { name: String },

    #[error("menu item '{name}' has both a link and children")]
    LinkWithChildren { name: String },
}

/// First item, at any depth, that is a link and a group at once
fn find_linked_group(items: &[MenuItem]) -> Option<&MenuItem> {
    items.iter().find_map(|item| {
        if item.href.is_some() && !item.children.is_empty() {
            Some(item)
        } else {
            find_linked_group(&item.children)
        }
    })
}

/// Static menu definition: items for everyone, then role-gated items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    common: Vec<MenuItem>,
    role_specific: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(common: Vec<MenuItem>, role_specific: Vec<MenuItem>) -> Result<Self, MenuError> {
        if let Some(item) = common.iter().find(|item| item.roles.is_some()) {
            return Err(MenuError::GatedCommonItem {
                name: item.name.clone(),
            });
        }
        if let Some(item) = role_specific
            .iter()
            .find(|item| item.roles.as_ref().map_or(true, |roles| roles.is_empty()))
        {
            return Err(MenuError::UngatedRoleItem {
                name: item.name.clone(),
            });
        }
        if let Some(item) = find_linked_group(&common).or_else(|| find_linked_group(&role_specific)) {
            return Err(MenuError::LinkWithChildren {
                name: item.name.clone(),
            });
        }
        Ok(Self {
            common,
            role_specific,
        })
    }

    pub fn common(&self) -> &[MenuItem] {
        &self.common
    }

    pub fn role_specific(&self) -> &[MenuItem] {
        &self.role_specific
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

    #[test]
    fn test_rejects_role_item_without_roles() {
        let err = MenuCatalog::new(vec![link("home")], vec![link("admin")]).unwrap_err();
        assert_eq!(err, MenuError::UngatedRoleItem { name: "admin".into() });

        let empty = link("empty").with_roles(Vec::<Role>::new());
        assert!(MenuCatalog::new(vec![], vec![empty]).is_err());
    }

    #[test]
    fn test_rejects_gated_common_item() {
        let gated = link("admin").with_roles([Role::Administrator]);
        let err = MenuCatalog::new(vec![gated], vec![]).unwrap_err();
        assert_eq!(err.to_string(), "common menu item 'admin' must not carry roles");
    }

    #[test]
    fn test_rejects_link_with_children_at_any_depth() {
        let mut linked = link("reports");
        linked.children = vec![link("monthly")];

        let err = MenuCatalog::new(vec![linked.clone()], vec![]).unwrap_err();
        assert_eq!(err, MenuError::LinkWithChildren { name: "reports".into() });

        let nested = MenuItem::group("office", Label::new("office", "office"), vec![linked])
            .with_roles([Role::Administrator]);
        let err = MenuCatalog::new(vec![link("home")], vec![nested]).unwrap_err();
        assert_eq!(err.to_string(), "menu item 'reports' has both a link and children");
    }
}
