use crate::shared::i18n::use_language;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::enums::{Language, Role, RoleSet};
use contracts::shared::menu::{resolve_menu, MenuCatalog, MenuItem};
use leptos::prelude::*;

/// Indented text outline of a resolved menu, one line per item
pub fn outline(items: &[MenuItem], lang: Language) -> Vec<String> {
    fn walk(items: &[MenuItem], depth: usize, lang: Language, out: &mut Vec<String>) {
        for item in items {
            let suffix = match &item.href {
                Some(href) => format!("  ({href})"),
                None => String::new(),
            };
            out.push(format!("{}{}{}", "  ".repeat(depth), item.label.get(lang), suffix));
            walk(&item.children, depth + 1, lang, out);
        }
    }

    let mut out = Vec::new();
    walk(items, 0, lang, &mut out);
    out
}

/// Menu as each single role would see it, next to the common-only menu
#[component]
pub fn NavigationPreviewPage() -> impl IntoView {
    let lang = use_language();
    let catalog = use_context::<MenuCatalog>().expect("MenuCatalog context not found");

    let mut columns: Vec<(Option<Role>, Vec<MenuItem>)> = vec![(None, resolve_menu(&catalog, &RoleSet::new()))];
    columns.extend(
        Role::all()
            .into_iter()
            .map(|role| (Some(role), resolve_menu(&catalog, &RoleSet::from([role])))),
    );

    view! {
        <PageFrame page_id="sys_navigation--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Vista previa del menú", "Menu preview")}</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="menu-preview">
                    {columns
                        .into_iter()
                        .map(|(role, items)| {
                            let items = StoredValue::new(items);
                            view! {
                                <div class="menu-preview__column">
                                    <h3 class="menu-preview__title">
                                        {move || match role {
                                            Some(role) => role.label(lang.get()).to_string(),
                                            None => lang.get().pick("Sin rol", "No role").to_string(),
                                        }}
                                    </h3>
                                    <pre class="menu-preview__tree">
                                        {move || items.with_value(|items| outline(items, lang.get()).join("\n"))}
                                    </pre>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::label::Label;

    #[test]
    fn test_outline_indents_children() {
        let items = vec![MenuItem::group(
            "academic",
            Label::new("Académico", "Academic"),
            vec![MenuItem::link("grades", Label::new("Notas", "Grades"), "/grades")],
        )];
        assert_eq!(
            outline(&items, Language::EnUs),
            vec!["Academic".to_string(), "  Grades  (/grades)".to_string()]
        );
    }
}
