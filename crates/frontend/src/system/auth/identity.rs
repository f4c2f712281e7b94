//! Mock identity provider: the signed-in user comes from configuration,
//! optionally with role tags overridden by `?roles=`.

use crate::shared::config::IdentityConfig;
use contracts::system::auth::UserInfo;

pub fn identity_from_config(identity: &IdentityConfig, role_override: Option<Vec<String>>) -> UserInfo {
    let role_tags = match role_override {
        Some(tags) => {
            log::info!("Role tags overridden from query string: {:?}", tags);
            tags
        }
        None => identity.roles.clone(),
    };

    UserInfo {
        id: identity.user_id.clone(),
        username: identity.username.clone(),
        full_name: identity.full_name.clone(),
        role_tags,
        student_name: identity.student_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    fn identity() -> IdentityConfig {
        IdentityConfig {
            user_id: "usr-001".into(),
            username: "lgarcia".into(),
            full_name: Some("Laura García".into()),
            student_name: Some("Pablo García".into()),
            roles: vec!["parent".into()],
        }
    }

    #[test]
    fn test_roles_from_config() {
        let user = identity_from_config(&identity(), None);
        assert_eq!(user.display_name(), "Laura García");
        assert!(user.has_role(Role::Parent));
        assert_eq!(user.roles().len(), 1);
    }

    #[test]
    fn test_query_override_replaces_roles() {
        let user = identity_from_config(
            &identity(),
            Some(vec!["teacher".into(), "administrator".into(), "janitor".into()]),
        );
        assert!(!user.has_role(Role::Parent));
        assert!(user.has_role(Role::Teacher));
        assert!(user.has_role(Role::Administrator));
        assert_eq!(user.roles().len(), 2);
    }

    #[test]
    fn test_empty_override_leaves_no_roles() {
        let user = identity_from_config(&identity(), Some(Vec::new()));
        assert!(user.roles().is_empty());
    }
}
