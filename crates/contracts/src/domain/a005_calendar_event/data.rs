use super::aggregate::{CalendarEvent, EventKind};
use crate::domain::common::{date, time};
use crate::shared::dataset::StaticDataset;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

fn event(
    id: u32,
    title: &str,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    kind: EventKind,
    location: Option<&str>,
) -> CalendarEvent {
    CalendarEvent {
        id: format!("evt-{id:03}"),
        title: title.to_string(),
        date,
        start_time,
        kind,
        location: location.map(str::to_string),
        description: None,
        created_by_user: false,
    }
}

pub static CALENDAR_EVENTS: Lazy<Vec<CalendarEvent>> = Lazy::new(|| {
    use EventKind as K;
    vec![
        event(1, "Examen de Matemáticas", date(2026, 3, 19), Some(time(9, 0)), K::Exam, Some("Aula 2.º B")),
        event(2, "Reunión de familias 2.º ESO", date(2026, 3, 24), Some(time(17, 30)), K::Meeting, Some("Salón de actos")),
        event(3, "Vacaciones de Semana Santa", date(2026, 3, 30), None, K::Holiday, None),
        event(4, "Excursión al Museo de Ciencias", date(2026, 4, 15), Some(time(8, 30)), K::Excursion, Some("Salida desde el patio")),
        event(5, "Examen de Inglés", date(2026, 4, 21), Some(time(10, 0)), K::Exam, Some("Aula 2.º B")),
        event(6, "Día del Libro", date(2026, 4, 23), None, K::Activity, Some("Biblioteca")),
        event(7, "Festivo local", date(2026, 5, 15), None, K::Holiday, None),
        event(8, "Jornada deportiva", date(2026, 5, 29), Some(time(9, 30)), K::Activity, Some("Polideportivo")),
        event(9, "Examen de Ciencias", date(2026, 6, 4), Some(time(11, 0)), K::Exam, Some("Laboratorio")),
        event(10, "Fiesta de fin de curso", date(2026, 6, 19), Some(time(18, 0)), K::Activity, Some("Patio central")),
    ]
});

pub fn dataset() -> StaticDataset<CalendarEvent> {
    StaticDataset::new(&CALENDAR_EVENTS)
}
