use contracts::enums::RoleSet;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::identity::identity_from_config;
use crate::shared::config::Config;
use crate::shared::query_params::{current_query, role_override};

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: UserInfo,
    /// Role tags the provider handed over, before any demo switch
    pub original_role_tags: Vec<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = use_context::<Config>().expect("Config context not found");
    let user = identity_from_config(&config.identity, role_override(&current_query()));
    log::info!(
        "Signed in as {} with roles {:?}",
        user.username,
        user.roles()
    );

    let (auth_state, set_auth_state) = signal(AuthState {
        original_role_tags: user.role_tags.clone(),
        user,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Parsed active roles of the current user
pub fn use_roles() -> Memo<RoleSet> {
    let (auth_state, _) = use_auth();
    roles_memo(auth_state)
}

/// Tags are parsed again only when the auth state changes
fn roles_memo(auth_state: ReadSignal<AuthState>) -> Memo<RoleSet> {
    Memo::new(move |_| auth_state.with(|s| s.user.roles()))
}

/// Demo role switch; `None` restores the provider's tags
pub fn switch_roles(set_auth_state: WriteSignal<AuthState>, tags: Option<Vec<String>>) {
    set_auth_state.update(|state| {
        state.user.role_tags = tags.unwrap_or_else(|| state.original_role_tags.clone());
        log::info!("Active role tags: {:?}", state.user.role_tags);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    fn state(tags: &[&str]) -> AuthState {
        let role_tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        AuthState {
            user: UserInfo {
                id: "u1".into(),
                username: "profe.garcia".into(),
                full_name: None,
                role_tags: role_tags.clone(),
                student_name: None,
            },
            original_role_tags: role_tags,
        }
    }

    #[test]
    fn test_roles_follow_role_switch() {
        let owner = Owner::new();
        owner.set();

        let (auth_state, set_auth_state) = signal(state(&["teacher", "janitor"]));
        let roles = roles_memo(auth_state);
        assert_eq!(roles.get_untracked(), RoleSet::from([Role::Teacher]));
        assert_eq!(roles.get_untracked(), RoleSet::from([Role::Teacher]));

        switch_roles(set_auth_state, Some(vec!["administrator".into()]));
        assert_eq!(roles.get_untracked(), RoleSet::from([Role::Administrator]));

        switch_roles(set_auth_state, None);
        assert_eq!(roles.get_untracked(), RoleSet::from([Role::Teacher]));
    }
}
