use crate::domain::a001_absence::{Absence, AbsenceStatus};
use crate::domain::a002_grade::{average_score, Grade};
use crate::domain::a003_message::Message;
use crate::domain::a005_calendar_event::CalendarEvent;
use crate::domain::a007_homework::{Homework, HomeworkStatus};
use crate::shared::dataset::DatasetProvider;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Сводка для главной страницы портала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub total_absences: usize,
    pub unjustified_absences: usize,
    pub pending_absences: usize,
    pub average_grade: Option<f64>,
    pub failed_assessments: usize,
    pub unread_messages: usize,
    pub upcoming_events: usize,
    pub next_event: Option<CalendarEvent>,
    pub pending_homework: usize,
    pub overdue_homework: usize,
}

impl OverviewSummary {
    pub fn compute(
        absences: &impl DatasetProvider<Absence>,
        grades: &impl DatasetProvider<Grade>,
        messages: &impl DatasetProvider<Message>,
        events: &impl DatasetProvider<CalendarEvent>,
        homework: &impl DatasetProvider<Homework>,
        today: NaiveDate,
    ) -> Self {
        let absences = absences.records();
        let grades = grades.records();
        let messages = messages.records();
        let events = events.records();
        let homework = homework.records();
        let next_event = events
            .iter()
            .filter(|e| e.is_upcoming(today))
            .min_by_key(|e| (e.date, e.start_time))
            .cloned();

        Self {
            total_absences: absences.len(),
            unjustified_absences: absences
                .iter()
                .filter(|a| a.status == AbsenceStatus::Unjustified)
                .count(),
            pending_absences: absences
                .iter()
                .filter(|a| a.status == AbsenceStatus::Pending)
                .count(),
            average_grade: average_score(grades),
            failed_assessments: grades.iter().filter(|g| !g.is_passing()).count(),
            unread_messages: messages.iter().filter(|m| m.is_unread()).count(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(today)).count(),
            next_event,
            pending_homework: homework
                .iter()
                .filter(|h| h.status == HomeworkStatus::Pending)
                .count(),
            overdue_homework: homework.iter().filter(|h| h.is_overdue(today)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::date;
    use crate::domain::{a001_absence, a002_grade, a003_message, a005_calendar_event, a007_homework};

    #[test]
    fn test_compute_on_sample_data() {
        let summary = OverviewSummary::compute(
            &a001_absence::data::dataset(),
            &a002_grade::data::dataset(),
            &a003_message::data::dataset(),
            &a005_calendar_event::data::dataset(),
            &a007_homework::data::dataset(),
            date(2026, 3, 18),
        );
        assert_eq!(summary.total_absences, 14);
        assert_eq!(summary.unjustified_absences, 1);
        assert_eq!(summary.pending_absences, 1);
        assert_eq!(summary.unread_messages, 3);
        assert_eq!(summary.failed_assessments, 1);
        assert_eq!(summary.upcoming_events, 10);
        assert_eq!(summary.next_event.map(|e| e.id), Some("evt-001".to_string()));
        assert_eq!(summary.pending_homework, 2);
        assert_eq!(summary.overdue_homework, 2);
    }

    #[test]
    fn test_compute_counts_session_copies() {
        let mut messages = a003_message::data::dataset().all().to_vec();
        for message in &mut messages {
            message.mark_read();
        }
        let summary = OverviewSummary::compute(
            &a001_absence::data::dataset(),
            &a002_grade::data::dataset(),
            &messages,
            &a005_calendar_event::data::dataset(),
            &a007_homework::data::dataset(),
            date(2026, 3, 18),
        );
        assert_eq!(summary.unread_messages, 0);
        assert_eq!(summary.total_absences, 14);
    }

    #[test]
    fn test_compute_on_empty_data() {
        let summary = OverviewSummary::compute(
            &Vec::new(),
            &Vec::new(),
            &Vec::new(),
            &Vec::new(),
            &Vec::new(),
            date(2026, 1, 1),
        );
        assert_eq!(summary.average_grade, None);
        assert!(summary.next_event.is_none());
        assert_eq!(summary.total_absences, 0);
    }
}
