use crate::enums::{Language, Subject};
use crate::shared::list_query::{Filterable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

pub const FILTER_SUBJECT: &str = "subject";
pub const FILTER_TERM: &str = "term";
pub const FILTER_KIND: &str = "kind";

pub const SORT_DATE: &str = "date";
pub const SORT_SUBJECT: &str = "subject";
pub const SORT_ASSESSMENT: &str = "assessment";
pub const SORT_SCORE: &str = "score";

/// Проходной балл по шкале 0–10
pub const PASS_MARK: f64 = 5.0;

/// Учебный триместр
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "t1")]
    First,
    #[serde(rename = "t2")]
    Second,
    #[serde(rename = "t3")]
    Third,
}

impl Term {
    pub fn code(&self) -> &'static str {
        match self {
            Term::First => "t1",
            Term::Second => "t2",
            Term::Third => "t3",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Term::First => lang.pick("1.ª evaluación", "First term"),
            Term::Second => lang.pick("2.ª evaluación", "Second term"),
            Term::Third => lang.pick("3.ª evaluación", "Third term"),
        }
    }

    pub fn all() -> Vec<Term> {
        vec![Term::First, Term::Second, Term::Third]
    }
}

/// Тип оценочного задания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeKind {
    Exam,
    Project,
    Homework,
    Oral,
}

impl GradeKind {
    pub fn code(&self) -> &'static str {
        match self {
            GradeKind::Exam => "exam",
            GradeKind::Project => "project",
            GradeKind::Homework => "homework",
            GradeKind::Oral => "oral",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            GradeKind::Exam => lang.pick("Examen", "Exam"),
            GradeKind::Project => lang.pick("Proyecto", "Project"),
            GradeKind::Homework => lang.pick("Tarea", "Homework"),
            GradeKind::Oral => lang.pick("Exposición oral", "Oral presentation"),
        }
    }

    pub fn all() -> Vec<GradeKind> {
        vec![GradeKind::Exam, GradeKind::Project, GradeKind::Homework, GradeKind::Oral]
    }
}

/// Оценка за одно задание
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub subject: Subject,
    pub term: Term,
    pub kind: GradeKind,
    pub assessment: String,
    /// 0.0–10.0
    pub score: f64,
    pub date: NaiveDate,
    pub teacher: String,
    pub comment: Option<String>,
}

impl Grade {
    pub fn is_passing(&self) -> bool {
        self.score >= PASS_MARK
    }
}

/// Среднее арифметическое оценок, `None` для пустого среза
pub fn average_score(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        None
    } else {
        Some(grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64)
    }
}

impl Filterable for Grade {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_SUBJECT => Some(Cow::Borrowed(self.subject.code())),
            FILTER_TERM => Some(Cow::Borrowed(self.term.code())),
            FILTER_KIND => Some(Cow::Borrowed(self.kind.code())),
            _ => None,
        }
    }
}

impl Sortable for Grade {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            SORT_SUBJECT => self.subject.cmp(&other.subject),
            SORT_ASSESSMENT => self
                .assessment
                .to_lowercase()
                .cmp(&other.assessment.to_lowercase()),
            SORT_SCORE => self
                .score
                .partial_cmp(&other.score)
                .unwrap_or(Ordering::Equal),
            _ => self.date.cmp(&other.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::date;

    fn grade(score: f64) -> Grade {
        Grade {
            id: "g".into(),
            subject: Subject::Music,
            term: Term::First,
            kind: GradeKind::Exam,
            assessment: "Lectura rítmica".into(),
            score,
            date: date(2025, 10, 1),
            teacher: "Ana".into(),
            comment: None,
        }
    }

    #[test]
    fn test_average_score() {
        assert_eq!(average_score(&[]), None);
        assert_eq!(average_score(&[grade(6.0), grade(8.0)]), Some(7.0));
    }

    #[test]
    fn test_passing() {
        assert!(grade(5.0).is_passing());
        assert!(!grade(4.9).is_passing());
    }

    #[test]
    fn test_sort_by_score() {
        assert_eq!(grade(4.0).compare_by_field(&grade(9.5), SORT_SCORE), Ordering::Less);
    }
}
