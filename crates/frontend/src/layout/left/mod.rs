pub mod sidebar;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
pub use sidebar::Sidebar;

/// Left zone: navigation tree plus the followed-student footer
#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let student = move || auth_state.with(|s| s.user.student_name.clone());

    view! {
        <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            <Sidebar />
            {move || student().map(|name| view! {
                <div class="app-sidebar__footer">
                    <span class="app-sidebar__footer-label">
                        {move || ctx.language.get().pick("Alumno", "Student")}
                    </span>
                    <span class="app-sidebar__footer-value">{name}</span>
                </div>
            })}
        </div>
    }
}
