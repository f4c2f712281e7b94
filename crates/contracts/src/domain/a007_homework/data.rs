use super::aggregate::{Homework, HomeworkStatus};
use crate::domain::common::date;
use crate::enums::Subject;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn homework(
    id: u32,
    subject: Subject,
    title: &str,
    description: &str,
    assigned_on: NaiveDate,
    due_on: NaiveDate,
    status: HomeworkStatus,
    score: Option<f64>,
) -> Homework {
    Homework {
        id: format!("hw-{id:03}"),
        subject,
        title: title.to_string(),
        description: description.to_string(),
        assigned_on,
        due_on,
        status,
        score,
    }
}

pub static HOMEWORK: Lazy<Vec<Homework>> = Lazy::new(|| {
    use HomeworkStatus as St;
    use Subject as S;
    vec![
        homework(9, S::Mathematics, "Problemas de ecuaciones", "Página 112, ejercicios 1 a 8.", date(2026, 3, 12), date(2026, 3, 17), St::Pending, None),
        homework(8, S::English, "Writing: a letter to a friend", "150 words, use past simple.", date(2026, 3, 10), date(2026, 3, 16), St::Pending, None),
        homework(7, S::Science, "Informe de laboratorio", "Experimento de densidad.", date(2026, 3, 2), date(2026, 3, 9), St::Submitted, None),
        homework(6, S::History, "Mapa conceptual del feudalismo", "Entregar en formato A3.", date(2026, 2, 23), date(2026, 3, 2), St::Graded, Some(8.0)),
        homework(5, S::Spanish, "Lectura: capítulo 4", "Resumen de una página.", date(2026, 2, 16), date(2026, 2, 20), St::Late, None),
        homework(4, S::Mathematics, "Fracciones algebraicas", "Hoja de ejercicios 3.", date(2026, 1, 13), date(2026, 1, 19), St::Graded, Some(4.5)),
        homework(3, S::Music, "Ficha de compases", "Completar la ficha 6.", date(2025, 12, 1), date(2025, 12, 5), St::Graded, Some(7.2)),
        homework(2, S::Art, "Lámina de perspectiva", "Perspectiva caballera de una habitación.", date(2025, 11, 10), date(2025, 11, 24), St::Graded, Some(7.5)),
        homework(1, S::Science, "Dibujo de la célula", "Célula animal y vegetal con sus partes.", date(2025, 11, 3), date(2025, 11, 10), St::Submitted, None),
    ]
});

pub fn dataset() -> StaticDataset<Homework> {
    StaticDataset::new(&HOMEWORK)
}
