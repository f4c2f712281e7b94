//! Portal navigation catalog.

use crate::enums::Role;
use crate::shared::label::Label;
use crate::shared::menu::{MenuCatalog, MenuError, MenuItem};

pub const PATH_DASHBOARD: &str = "/";
pub const PATH_GRADES: &str = "/grades";
pub const PATH_ABSENCES: &str = "/absences";
pub const PATH_HOMEWORK: &str = "/homework";
pub const PATH_MESSAGES: &str = "/messages";
pub const PATH_BULLETIN: &str = "/bulletin";
pub const PATH_CALENDAR: &str = "/calendar";
pub const PATH_DOCUMENTS: &str = "/documents";
pub const PATH_NAVIGATION_PREVIEW: &str = "/admin/navigation";
pub const PATH_SETTINGS: &str = "/admin/settings";

pub fn portal_catalog() -> Result<MenuCatalog, MenuError> {
    let common = vec![
        MenuItem::link("dashboard", Label::new("Inicio", "Home"), PATH_DASHBOARD).with_icon("home"),
        MenuItem::group(
            "academic",
            Label::new("Académico", "Academic"),
            vec![
                MenuItem::link("grades", Label::new("Calificaciones", "Grades"), PATH_GRADES)
                    .with_icon("award"),
                MenuItem::link("absences", Label::new("Faltas de asistencia", "Absences"), PATH_ABSENCES)
                    .with_icon("user-x"),
            ],
        )
        .with_icon("book"),
        MenuItem::group(
            "communication",
            Label::new("Comunicación", "Communication"),
            vec![
                MenuItem::link("messages", Label::new("Mensajes", "Messages"), PATH_MESSAGES)
                    .with_icon("mail"),
                MenuItem::link("bulletin", Label::new("Tablón de anuncios", "Bulletin board"), PATH_BULLETIN)
                    .with_icon("megaphone"),
            ],
        )
        .with_icon("message-square"),
        MenuItem::link("calendar", Label::new("Calendario", "Calendar"), PATH_CALENDAR).with_icon("calendar"),
    ];

    let role_specific = vec![
        MenuItem::link("homework", Label::new("Tareas", "Homework"), PATH_HOMEWORK)
            .with_icon("clipboard")
            .with_roles([Role::Student, Role::Parent]),
        MenuItem::group(
            "secretary",
            Label::new("Secretaría", "School office"),
            vec![MenuItem::link("documents", Label::new("Documentos", "Documents"), PATH_DOCUMENTS)
                .with_icon("file-text")],
        )
        .with_icon("folder")
        .with_roles([Role::Parent, Role::Administrator]),
        MenuItem::group(
            "administration",
            Label::new("Administración", "Administration"),
            vec![
                MenuItem::link(
                    "navigation_preview",
                    Label::new("Vista de navegación", "Navigation preview"),
                    PATH_NAVIGATION_PREVIEW,
                )
                .with_icon("eye"),
                MenuItem::link("settings", Label::new("Configuración", "Settings"), PATH_SETTINGS)
                    .with_icon("settings")
                    .with_roles([Role::Administrator]),
            ],
        )
        .with_icon("shield")
        .with_roles([Role::Teacher, Role::Administrator]),
    ];

    MenuCatalog::new(common, role_specific)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RoleSet;
    use crate::shared::menu::{active_trail, resolve_menu};

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_catalog_is_valid() {
        assert!(portal_catalog().is_ok());
    }

    #[test]
    fn test_without_roles_only_common_items() {
        let menu = resolve_menu(&portal_catalog().unwrap(), &RoleSet::new());
        assert_eq!(names(&menu), vec!["dashboard", "academic", "communication", "calendar"]);
    }

    #[test]
    fn test_administrator_menu() {
        let catalog = portal_catalog().unwrap();
        let menu = resolve_menu(&catalog, &RoleSet::from([Role::Administrator]));
        assert_eq!(
            names(&menu),
            vec!["dashboard", "academic", "communication", "calendar", "secretary", "administration"]
        );
        assert_eq!(names(&menu[5].children), vec!["navigation_preview", "settings"]);
    }

    #[test]
    fn test_teacher_does_not_see_settings() {
        let catalog = portal_catalog().unwrap();
        let menu = resolve_menu(&catalog, &RoleSet::from([Role::Teacher]));
        let admin = menu.iter().find(|i| i.name == "administration").unwrap();
        assert_eq!(names(&admin.children), vec!["navigation_preview"]);
    }

    #[test]
    fn test_parent_menu_and_trail() {
        let catalog = portal_catalog().unwrap();
        let menu = resolve_menu(&catalog, &RoleSet::from([Role::Parent]));
        assert_eq!(
            names(&menu),
            vec!["dashboard", "academic", "communication", "calendar", "homework", "secretary"]
        );
        assert_eq!(active_trail(&menu, PATH_DOCUMENTS), vec!["secretary"]);
        assert_eq!(active_trail(&menu, PATH_BULLETIN), vec!["communication"]);
    }
}
