use crate::enums::Language;
use crate::shared::list_query::Filterable;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

pub const FILTER_KIND: &str = "kind";
pub const FILTER_MONTH: &str = "month";

pub const TITLE_MAX_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Exam,
    Holiday,
    Meeting,
    Excursion,
    Activity,
}

impl EventKind {
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Exam => "exam",
            EventKind::Holiday => "holiday",
            EventKind::Meeting => "meeting",
            EventKind::Excursion => "excursion",
            EventKind::Activity => "activity",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            EventKind::Exam => lang.pick("Examen", "Exam"),
            EventKind::Holiday => lang.pick("Festivo", "Holiday"),
            EventKind::Meeting => lang.pick("Reunión", "Meeting"),
            EventKind::Excursion => lang.pick("Excursión", "Field trip"),
            EventKind::Activity => lang.pick("Actividad", "Activity"),
        }
    }

    pub fn all() -> Vec<EventKind> {
        vec![
            EventKind::Exam,
            EventKind::Holiday,
            EventKind::Meeting,
            EventKind::Excursion,
            EventKind::Activity,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        EventKind::all().into_iter().find(|k| k.code() == code)
    }
}

/// Ключ `YYYY-MM` для фильтра по месяцу
pub fn month_code(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Событие календаря
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub kind: EventKind,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Добавлено пользователем в текущей сессии
    pub created_by_user: bool,
}

impl CalendarEvent {
    /// Новое событие, созданное пользователем
    pub fn new_for_insert(
        title: String,
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        kind: EventKind,
        location: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            date,
            start_time,
            kind,
            location: location.filter(|l| !l.trim().is_empty()),
            description: description.filter(|d| !d.trim().is_empty()),
            created_by_user: true,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if self.title.chars().count() > TITLE_MAX_LEN {
            return Err(format!("title must be at most {} characters", TITLE_MAX_LEN));
        }
        Ok(())
    }

    pub fn month(&self) -> String {
        month_code(self.date)
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

/// Месяцы, встречающиеся в `events`, по возрастанию
pub fn available_months(events: &[CalendarEvent]) -> Vec<String> {
    let mut months: Vec<String> = events.iter().map(CalendarEvent::month).collect();
    months.sort();
    months.dedup();
    months
}

impl Filterable for CalendarEvent {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_KIND => Some(Cow::Borrowed(self.kind.code())),
            FILTER_MONTH => Some(Cow::Owned(self.month())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::date;

    #[test]
    fn test_new_for_insert_trims_and_validates() {
        let event = CalendarEvent::new_for_insert(
            "  Tutoría con Elena  ".into(),
            date(2026, 4, 14),
            None,
            EventKind::Meeting,
            Some("   ".into()),
            None,
        );
        assert_eq!(event.title, "Tutoría con Elena");
        assert!(event.location.is_none());
        assert!(event.created_by_user);
        assert!(event.validate().is_ok());
        assert!(Uuid::parse_str(&event.id).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_and_long_titles() {
        let mut event = CalendarEvent::new_for_insert(
            " ".into(),
            date(2026, 4, 14),
            None,
            EventKind::Activity,
            None,
            None,
        );
        assert!(event.validate().is_err());
        event.title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_month_filter_value() {
        let event = CalendarEvent::new_for_insert(
            "Examen".into(),
            date(2026, 5, 3),
            None,
            EventKind::Exam,
            None,
            None,
        );
        assert_eq!(event.filter_value(FILTER_MONTH).as_deref(), Some("2026-05"));
        assert_eq!(event.filter_value(FILTER_KIND).as_deref(), Some("exam"));
    }
}
