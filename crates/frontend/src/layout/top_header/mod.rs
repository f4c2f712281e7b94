//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the school name, the language switcher,
//! a demo role switcher and the signed-in user with their roles.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::system::auth::context::{switch_roles, use_auth};
use contracts::enums::{Language, Role};
use leptos::prelude::*;
use thaw::*;

/// Select value meaning "the roles the identity provider gave us"
const ROLES_AS_SIGNED_IN: &str = "signed-in";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<Config>().expect("Config context not found");
    let (auth_state, set_auth_state) = use_auth();
    let lang = ctx.language;

    let is_sidebar_visible = move || ctx.left_open.get();

    // Language select <-> context
    let language_value = RwSignal::new(lang.get_untracked().code().to_string());
    Effect::new(move |prev: Option<String>| {
        let current = language_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            if let Some(selected) = Language::from_code(&current) {
                ctx.set_language(selected);
            }
        }
        current
    });

    // Demo role switch
    let role_value = RwSignal::new(ROLES_AS_SIGNED_IN.to_string());
    Effect::new(move |prev: Option<String>| {
        let current = role_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            let tags = (current != ROLES_AS_SIGNED_IN).then(|| vec![current.clone()]);
            switch_roles(set_auth_state, tags);
        }
        current
    });

    let role_badges = move || {
        let lang = lang.get();
        let roles = auth_state.with(|s| s.user.roles());
        if roles.is_empty() {
            return view! {
                <span class="badge badge--neutral">{lang.pick("Sin roles", "No roles")}</span>
            }
            .into_any();
        }
        roles
            .into_iter()
            .map(|role| view! { <span class="badge badge--primary">{role.label(lang)}</span> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || {
                        if is_sidebar_visible() {
                            lang.get().pick("Ocultar navegación", "Hide navigation")
                        } else {
                            lang.get().pick("Mostrar navegación", "Show navigation")
                        }
                    }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{config.portal.school_name.clone()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__select" title=move || lang.get().pick("Idioma", "Language")>
                    {icon("globe")}
                    <Select value=language_value size=SelectSize::Small>
                        {Language::all().into_iter().map(|l| view! {
                            <option value=l.code()>{l.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div class="top-header__select" title=move || lang.get().pick("Ver como", "View as")>
                    {icon("eye")}
                    <Select value=role_value size=SelectSize::Small>
                        <option value=ROLES_AS_SIGNED_IN>
                            {move || lang.get().pick("Mis roles", "My roles")}
                        </option>
                        {Role::all().into_iter().map(|role| view! {
                            <option value=role.code()>{move || role.label(lang.get())}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.user.display_name().to_string())}</span>
                    <span class="top-header__roles">{role_badges}</span>
                </div>
            </div>
        </div>
    }
}
