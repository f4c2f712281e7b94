use super::aggregate::{Absence, AbsenceKind, AbsenceStatus};
use crate::domain::common::date;
use crate::enums::Subject;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

const STUDENT: &str = "Lucía Martín Ortega";

fn absence(
    id: u32,
    date: NaiveDate,
    period: u8,
    subject: Subject,
    kind: AbsenceKind,
    status: AbsenceStatus,
    note: Option<&str>,
) -> Absence {
    Absence {
        id: format!("abs-{id:03}"),
        student: STUDENT.to_string(),
        date,
        period,
        subject,
        kind,
        status,
        note: note.map(str::to_string),
    }
}

/// Отсутствия текущего учебного года, новые сверху
pub static ABSENCES: Lazy<Vec<Absence>> = Lazy::new(|| {
    use AbsenceKind as K;
    use AbsenceStatus as S;
    vec![
        absence(14, date(2026, 3, 12), 1, Subject::Mathematics, K::Absence, S::Pending, None),
        absence(13, date(2026, 3, 3), 2, Subject::English, K::Late, S::Justified, Some("Cita médica")),
        absence(12, date(2026, 2, 18), 5, Subject::PhysicalEducation, K::EarlyLeave, S::Justified, Some("Recogida por la familia")),
        absence(11, date(2026, 2, 9), 1, Subject::Science, K::Absence, S::Justified, Some("Gripe")),
        absence(10, date(2026, 2, 9), 2, Subject::Mathematics, K::Absence, S::Justified, Some("Gripe")),
        absence(9, date(2026, 2, 9), 3, Subject::Spanish, K::Absence, S::Justified, Some("Gripe")),
        absence(8, date(2026, 1, 22), 4, Subject::History, K::Late, S::Unjustified, None),
        absence(7, date(2026, 1, 13), 1, Subject::Music, K::Absence, S::Justified, Some("Consulta dental")),
        absence(6, date(2025, 12, 1), 6, Subject::Art, K::EarlyLeave, S::Justified, Some("Competición deportiva")),
        absence(5, date(2025, 11, 17), 1, Subject::English, K::Late, S::Justified, Some("Transporte escolar")),
        absence(4, date(2025, 11, 4), 2, Subject::Science, K::Absence, S::Justified, Some("Revisión oftalmológica")),
        absence(3, date(2025, 10, 20), 3, Subject::Mathematics, K::Absence, S::Justified, Some("Asunto familiar")),
        absence(2, date(2025, 10, 6), 1, Subject::Spanish, K::Late, S::Justified, Some("Transporte escolar")),
        absence(1, date(2025, 9, 22), 4, Subject::History, K::Absence, S::Justified, Some("Fiebre")),
    ]
});

pub fn dataset() -> StaticDataset<Absence> {
    StaticDataset::new(&ABSENCES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dataset::DatasetProvider;

    #[test]
    fn test_sample_shape() {
        let records = dataset().records().to_vec();
        assert_eq!(dataset().all().len(), records.len());
        assert_eq!(records.len(), 14);
        assert_eq!(records.iter().filter(|a| a.is_justified()).count(), 12);
    }

    #[test]
    fn test_justified_filter_paginates_ten_then_two() {
        use crate::domain::a001_absence::FILTER_STATUS;
        use crate::shared::list_query::{query, FilterSpec, FilterValue, PageSize};

        let filters = FilterSpec::new().with(FILTER_STATUS, FilterValue::exact("justified"));
        let size = PageSize::new(10);

        let first = query(dataset().all(), &filters, None, 1, size);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_count, 12);
        assert_eq!(first.total_pages, 2);
        assert_eq!((first.start_index, first.end_index), (1, 10));

        let second = query(dataset().all(), &filters, None, 2, size);
        assert_eq!(second.items.len(), 2);
        assert_eq!((second.start_index, second.end_index), (11, 12));
        assert!(second.items.iter().all(Absence::is_justified));
    }

    #[test]
    fn test_session_copy_pages_like_static_dataset() {
        use crate::domain::a001_absence::FILTER_STATUS;
        use crate::shared::list_query::{FilterValue, ListViewState, PageSize};

        let mut state = ListViewState::new(&[FILTER_STATUS]);
        state.set_filter(FILTER_STATUS, FilterValue::exact("justified"));
        state.go_to_page(2);
        let size = PageSize::new(10);

        let session: Vec<Absence> = dataset().records().to_vec();
        let from_static = state.query(&dataset(), None, size);
        let from_session = state.query(&session, None, size);
        assert_eq!(from_static, from_session);
        assert_eq!(from_static.items.len(), 2);
    }
}
