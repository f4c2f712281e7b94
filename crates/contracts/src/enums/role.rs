use super::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Роли пользователя, выдаваемые внешним провайдером идентификации.
///
/// Перечисление закрыто: прочие теги отбрасывает [`Role::parse_tags`],
/// и они не совпадают ни с одним пунктом меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Parent,
    Teacher,
    Administrator,
}

/// Набор активных ролей пользователя
pub type RoleSet = BTreeSet<Role>;

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Teacher => "teacher",
            Role::Administrator => "administrator",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Role::Student => lang.pick("Estudiante", "Student"),
            Role::Parent => lang.pick("Familia", "Parent"),
            Role::Teacher => lang.pick("Docente", "Teacher"),
            Role::Administrator => lang.pick("Administración", "Administrator"),
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Student, Role::Parent, Role::Teacher, Role::Administrator]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            "teacher" => Some(Role::Teacher),
            "administrator" => Some(Role::Administrator),
            _ => None,
        }
    }

    /// Разбирает сырые теги ролей в набор, неизвестные теги отбрасываются.
    pub fn parse_tags<I, S>(tags: I) -> RoleSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|tag| {
                let tag = tag.as_ref().trim();
                let role = Role::from_code(tag);
                if role.is_none() && !tag.is_empty() {
                    log::warn!("ignoring unknown role tag '{}'", tag);
                }
                role
            })
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_drops_unknown() {
        let roles = Role::parse_tags(["parent", "superuser", " teacher ", ""]);
        assert_eq!(roles, RoleSet::from([Role::Parent, Role::Teacher]));
    }

    #[test]
    fn test_parse_tags_is_case_sensitive() {
        assert!(Role::parse_tags(["Administrator"]).is_empty());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Role::Administrator).unwrap();
        assert_eq!(json, "\"administrator\"");
    }
}
