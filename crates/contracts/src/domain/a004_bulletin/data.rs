use super::aggregate::{Announcement, AnnouncementCategory, Audience};
use crate::domain::common::at;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn announcement(
    id: u32,
    title: &str,
    summary: &str,
    category: AnnouncementCategory,
    audience: Audience,
    author: &str,
    published_at: NaiveDateTime,
    pinned: bool,
) -> Announcement {
    Announcement {
        id: format!("ann-{id:03}"),
        title: title.to_string(),
        summary: summary.to_string(),
        category,
        audience,
        author: author.to_string(),
        published_at,
        pinned,
    }
}

// Declared in arrival order, not display order: the page sorts pinned
// entries first and the rest newest first.
pub static ANNOUNCEMENTS: Lazy<Vec<Announcement>> = Lazy::new(|| {
    use AnnouncementCategory as C;
    use Audience as A;
    vec![
        announcement(1, "Calendario escolar 2025-2026", "Consultad los días no lectivos del curso.", C::Notice, A::Everyone, "Dirección", at(2025, 9, 1, 9, 0), true),
        announcement(2, "Menú de comedor de octubre", "Ya está publicado el menú mensual.", C::Cafeteria, A::Families, "Comedor", at(2025, 9, 29, 12, 0), false),
        announcement(3, "Jornada de puertas abiertas", "Visita guiada para nuevas familias.", C::Event, A::Families, "Dirección", at(2025, 11, 5, 10, 0), false),
        announcement(4, "Protocolo ante la gripe", "Recomendaciones sanitarias para el invierno.", C::Notice, A::Everyone, "Enfermería escolar", at(2025, 10, 14, 8, 30), true),
        announcement(5, "Festival de Navidad", "El festival será el 19 de diciembre en el salón de actos.", C::Event, A::Primary, "AMPA", at(2025, 12, 2, 17, 0), false),
        announcement(6, "Olimpiada matemática", "Inscripciones abiertas para secundaria.", C::News, A::Secondary, "Departamento de Matemáticas", at(2026, 1, 15, 11, 30), false),
        announcement(7, "Menú de comedor de febrero", "Incluye la semana cultural.", C::Cafeteria, A::Families, "Comedor", at(2026, 1, 30, 12, 0), false),
        announcement(8, "Resultados del torneo de ajedrez", "Enhorabuena a todos los participantes.", C::News, A::Everyone, "Educación Física", at(2026, 2, 20, 16, 0), false),
    ]
});

pub fn dataset() -> StaticDataset<Announcement> {
    StaticDataset::new(&ANNOUNCEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{query, FilterSpec, PageSize, SortSpec};

    fn ids(items: &[Announcement]) -> Vec<&str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_pinned_first_then_newest() {
        let data = dataset().all();
        assert_eq!(data.len(), 8);
        assert_eq!(data.iter().filter(|a| a.pinned).count(), 2);

        let sort = SortSpec::pinned_then_date_desc();
        let size = PageSize::new(6);
        let first = query(data, &FilterSpec::new(), Some(&sort), 1, size);
        assert_eq!(first.total_pages, 2);
        assert_eq!(
            ids(&first.items),
            vec!["ann-004", "ann-001", "ann-008", "ann-007", "ann-006", "ann-005"]
        );

        let second = query(data, &FilterSpec::new(), Some(&sort), 2, size);
        assert_eq!(ids(&second.items), vec!["ann-003", "ann-002"]);
    }
}
