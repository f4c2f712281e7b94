use crate::enums::{Language, Subject};
use crate::shared::list_query::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const FILTER_SUBJECT: &str = "subject";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    Pending,
    Submitted,
    Graded,
    Late,
}

impl HomeworkStatus {
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Pending => "pending",
            HomeworkStatus::Submitted => "submitted",
            HomeworkStatus::Graded => "graded",
            HomeworkStatus::Late => "late",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            HomeworkStatus::Pending => lang.pick("Pendiente", "Pending"),
            HomeworkStatus::Submitted => lang.pick("Entregada", "Submitted"),
            HomeworkStatus::Graded => lang.pick("Corregida", "Graded"),
            HomeworkStatus::Late => lang.pick("Fuera de plazo", "Late"),
        }
    }

    pub fn all() -> Vec<HomeworkStatus> {
        vec![
            HomeworkStatus::Pending,
            HomeworkStatus::Submitted,
            HomeworkStatus::Graded,
            HomeworkStatus::Late,
        ]
    }
}

/// Домашнее задание
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub subject: Subject,
    pub title: String,
    pub description: String,
    pub assigned_on: NaiveDate,
    pub due_on: NaiveDate,
    pub status: HomeworkStatus,
    pub score: Option<f64>,
}

impl Homework {
    /// Не сдано после срока
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == HomeworkStatus::Pending && self.due_on < today
    }
}

impl Filterable for Homework {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_SUBJECT => Some(Cow::Borrowed(self.subject.code())),
            FILTER_STATUS => Some(Cow::Borrowed(self.status.code())),
            _ => None,
        }
    }
}
