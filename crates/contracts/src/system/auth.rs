use crate::enums::{Role, RoleSet};
use serde::{Deserialize, Serialize};

/// Пользователь, как его описывает внешний провайдер идентификации.
///
/// Теги ролей хранятся как есть; [`UserInfo::roles`] сужает их до
/// закрытого перечисления [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_tags: Vec<String>,
    /// Ученик, за которым следит учётная запись (родители)
    pub student_name: Option<String>,
}

impl UserInfo {
    pub fn roles(&self) -> RoleSet {
        Role::parse_tags(&self.role_tags)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_ignore_unknown_tags() {
        let user = UserInfo {
            id: "u1".into(),
            username: "familia.martin".into(),
            full_name: None,
            role_tags: vec!["parent".into(), "root".into()],
            student_name: Some("Lucía".into()),
        };
        assert_eq!(user.roles(), RoleSet::from([Role::Parent]));
        assert!(user.has_role(Role::Parent));
        assert!(!user.has_role(Role::Administrator));
        assert_eq!(user.display_name(), "familia.martin");
    }
}
