use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_roles;
use contracts::enums::Language;
use contracts::shared::menu::{is_active, resolve_menu, MenuCatalog, MenuItem};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const BASE_PADDING_PX: usize = 12;
const INDENT_PX: usize = 14;

/// Navigation tree resolved for the active roles.
///
/// The sidebar owns no visibility logic: it renders whatever
/// `resolve_menu` returns and only keeps expand/collapse state.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let catalog = use_context::<MenuCatalog>().expect("MenuCatalog context not found");
    let roles = use_roles();
    let location = use_location();
    let pathname = location.pathname;

    let menu = Memo::new(move |_| roles.with(|active| resolve_menu(&catalog, active)));

    // Route change (or a new menu after a role switch) reveals the active leaf
    Effect::new(move |_| {
        let path = pathname.get();
        menu.with(|items| ctx.reveal_active(items, &path));
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                let lang = ctx.language.get();
                menu.get()
                    .into_iter()
                    .map(|item| render_item(item, 0, lang, ctx, pathname))
                    .collect_view()
            }}
        </div>
    }
}

fn render_item(
    item: MenuItem,
    depth: usize,
    lang: Language,
    ctx: AppGlobalContext,
    pathname: Memo<String>,
) -> AnyView {
    let padding = format!("{}px", BASE_PADDING_PX + depth * INDENT_PX);
    let label = item.label.get(lang).to_string();
    let icon_view = item.icon.as_deref().map(icon);

    // Группа без ссылки остаётся группой, даже если фильтр ролей её опустошил
    if item.href.is_none() {
        let name = StoredValue::new(item.name.clone());
        let children = item.children;
        let is_expanded = move || name.with_value(|n| ctx.is_group_expanded(n));

        return view! {
            <div class="app-sidebar__group">
                <div
                    class="app-sidebar__item"
                    style:padding-left=padding
                    on:click=move |_| name.with_value(|n| ctx.toggle_group(n))
                >
                    <div class="app-sidebar__item-content">
                        {icon_view}
                        <span>{label}</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=is_expanded
                    >
                        {icon("chevron-right")}
                    </div>
                </div>
                <Show when=is_expanded>
                    <div class="app-sidebar__children">
                        {children
                            .iter()
                            .cloned()
                            .map(|child| render_item(child, depth + 1, lang, ctx, pathname))
                            .collect_view()}
                    </div>
                </Show>
            </div>
        }
        .into_any();
    }

    let href = item.href.clone().unwrap_or_default();
    let leaf = StoredValue::new(item);

    view! {
        <a
            href=href
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                pathname.with(|path| leaf.with_value(|item| is_active(item, path)))
            }
            style:padding-left=padding
        >
            <div class="app-sidebar__item-content">
                {icon_view}
                <span>{label}</span>
            </div>
        </a>
    }
    .into_any()
}
