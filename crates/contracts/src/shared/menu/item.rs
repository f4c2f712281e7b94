use crate::enums::{Role, RoleSet};
use crate::shared::label::Label;
use serde::{Deserialize, Serialize};

/// Navigation menu node: a link (leaf) or a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier, also the key in the expanded-groups set
    pub name: String,
    pub label: Label,
    pub href: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
    /// `None` means visible to everyone
    #[serde(default)]
    pub roles: Option<RoleSet>,
}

impl MenuItem {
    pub fn link(name: &str, label: Label, href: &str) -> Self {
        Self {
            name: name.to_string(),
            label,
            href: Some(href.to_string()),
            icon: None,
            children: Vec::new(),
            roles: None,
        }
    }

    pub fn group(name: &str, label: Label, children: Vec<MenuItem>) -> Self {
        Self {
            name: name.to_string(),
            label,
            href: None,
            icon: None,
            children,
            roles: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_roles<I: IntoIterator<Item = Role>>(mut self, roles: I) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children and no target of its own
    pub fn is_group(&self) -> bool {
        !self.children.is_empty() && self.href.is_none()
    }

    pub fn is_visible_to(&self, active_roles: &RoleSet) -> bool {
        match &self.roles {
            None => true,
            Some(roles) => !roles.is_disjoint(active_roles),
        }
    }
}
