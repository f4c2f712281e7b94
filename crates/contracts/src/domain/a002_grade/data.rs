use super::aggregate::{Grade, GradeKind, Term};
use crate::domain::common::date;
use crate::enums::Subject;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn grade(
    id: u32,
    subject: Subject,
    term: Term,
    kind: GradeKind,
    assessment: &str,
    score: f64,
    date: NaiveDate,
    teacher: &str,
    comment: Option<&str>,
) -> Grade {
    Grade {
        id: format!("grd-{id:03}"),
        subject,
        term,
        kind,
        assessment: assessment.to_string(),
        score,
        date,
        teacher: teacher.to_string(),
        comment: comment.map(str::to_string),
    }
}

pub static GRADES: Lazy<Vec<Grade>> = Lazy::new(|| {
    use GradeKind as K;
    use Subject as S;
    use Term as T;
    vec![
        grade(16, S::Mathematics, T::Second, K::Exam, "Ecuaciones de segundo grado", 7.8, date(2026, 3, 10), "Jorge Navarro", Some("Buen razonamiento")),
        grade(15, S::English, T::Second, K::Oral, "Presentation: my hometown", 8.5, date(2026, 3, 4), "Emma Collins", None),
        grade(14, S::Science, T::Second, K::Project, "Maqueta del sistema solar", 9.2, date(2026, 2, 26), "Pilar Herrera", Some("Trabajo excelente")),
        grade(13, S::History, T::Second, K::Exam, "La Edad Media", 6.4, date(2026, 2, 19), "Raúl Domínguez", None),
        grade(12, S::Spanish, T::Second, K::Homework, "Comentario de texto", 7.0, date(2026, 2, 12), "Marta Iglesias", None),
        grade(11, S::PhysicalEducation, T::Second, K::Exam, "Prueba de resistencia", 8.0, date(2026, 2, 5), "Iván Soler", None),
        grade(10, S::Music, T::Second, K::Oral, "Interpretación con flauta", 5.5, date(2026, 1, 28), "Ana Prieto", Some("Debe practicar más")),
        grade(9, S::Mathematics, T::Second, K::Homework, "Fracciones algebraicas", 4.5, date(2026, 1, 20), "Jorge Navarro", Some("Entregar corrección")),
        grade(8, S::Mathematics, T::First, K::Exam, "Números enteros y potencias", 8.3, date(2025, 12, 11), "Jorge Navarro", None),
        grade(7, S::Spanish, T::First, K::Exam, "Ortografía y morfología", 6.9, date(2025, 12, 9), "Marta Iglesias", None),
        grade(6, S::English, T::First, K::Exam, "Unit 1-3 test", 9.0, date(2025, 12, 3), "Emma Collins", Some("Great job!")),
        grade(5, S::Art, T::First, K::Project, "Lámina de perspectiva", 7.5, date(2025, 11, 26), "Clara Vidal", None),
        grade(4, S::Science, T::First, K::Exam, "La célula", 5.8, date(2025, 11, 18), "Pilar Herrera", None),
        grade(3, S::History, T::First, K::Project, "Línea del tiempo", 8.8, date(2025, 11, 6), "Raúl Domínguez", None),
        grade(2, S::Music, T::First, K::Homework, "Ficha de lenguaje musical", 7.2, date(2025, 10, 22), "Ana Prieto", None),
        grade(1, S::PhysicalEducation, T::First, K::Oral, "Reglamento de baloncesto", 6.0, date(2025, 10, 8), "Iván Soler", None),
    ]
});

pub fn dataset() -> StaticDataset<Grade> {
    StaticDataset::new(&GRADES)
}
