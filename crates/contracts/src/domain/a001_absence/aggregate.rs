use crate::enums::{Language, Subject};
use crate::shared::list_query::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const FILTER_STATUS: &str = "status";
pub const FILTER_SUBJECT: &str = "subject";
pub const FILTER_KIND: &str = "kind";

/// Тип отсутствия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    Absence,
    Late,
    EarlyLeave,
}

impl AbsenceKind {
    pub fn code(&self) -> &'static str {
        match self {
            AbsenceKind::Absence => "absence",
            AbsenceKind::Late => "late",
            AbsenceKind::EarlyLeave => "early_leave",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            AbsenceKind::Absence => lang.pick("Falta", "Absence"),
            AbsenceKind::Late => lang.pick("Retraso", "Late arrival"),
            AbsenceKind::EarlyLeave => lang.pick("Salida anticipada", "Early leave"),
        }
    }

    pub fn all() -> Vec<AbsenceKind> {
        vec![AbsenceKind::Absence, AbsenceKind::Late, AbsenceKind::EarlyLeave]
    }
}

/// Статус обоснования отсутствия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    Justified,
    Unjustified,
    Pending,
}

impl AbsenceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AbsenceStatus::Justified => "justified",
            AbsenceStatus::Unjustified => "unjustified",
            AbsenceStatus::Pending => "pending",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            AbsenceStatus::Justified => lang.pick("Justificada", "Justified"),
            AbsenceStatus::Unjustified => lang.pick("Injustificada", "Unjustified"),
            AbsenceStatus::Pending => lang.pick("Pendiente", "Pending"),
        }
    }

    pub fn all() -> Vec<AbsenceStatus> {
        vec![
            AbsenceStatus::Justified,
            AbsenceStatus::Unjustified,
            AbsenceStatus::Pending,
        ]
    }
}

/// Запись об отсутствии ученика на уроке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: String,
    pub student: String,
    pub date: NaiveDate,
    /// Номер урока в расписании дня, начиная с 1
    pub period: u8,
    pub subject: Subject,
    pub kind: AbsenceKind,
    pub status: AbsenceStatus,
    pub note: Option<String>,
}

impl Absence {
    pub fn is_justified(&self) -> bool {
        self.status == AbsenceStatus::Justified
    }
}

impl Filterable for Absence {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_STATUS => Some(Cow::Borrowed(self.status.code())),
            FILTER_SUBJECT => Some(Cow::Borrowed(self.subject.code())),
            FILTER_KIND => Some(Cow::Borrowed(self.kind.code())),
            _ => None,
        }
    }
}
