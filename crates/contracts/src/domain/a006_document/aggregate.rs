use crate::enums::Language;
use crate::shared::list_query::{Filterable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_YEAR: &str = "year";

pub const SORT_TITLE: &str = "title";
pub const SORT_ISSUED_ON: &str = "issued_on";
pub const SORT_SIZE: &str = "size_kb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Report,
    Circular,
    Form,
    Certificate,
}

impl DocumentCategory {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentCategory::Report => "report",
            DocumentCategory::Circular => "circular",
            DocumentCategory::Form => "form",
            DocumentCategory::Certificate => "certificate",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            DocumentCategory::Report => lang.pick("Boletines", "Report cards"),
            DocumentCategory::Circular => lang.pick("Circulares", "Circulars"),
            DocumentCategory::Form => lang.pick("Formularios", "Forms"),
            DocumentCategory::Certificate => lang.pick("Certificados", "Certificates"),
        }
    }

    pub fn all() -> Vec<DocumentCategory> {
        vec![
            DocumentCategory::Report,
            DocumentCategory::Circular,
            DocumentCategory::Form,
            DocumentCategory::Certificate,
        ]
    }
}

/// Документ, доступный для скачивания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: DocumentCategory,
    /// Например `2025-2026`
    pub school_year: String,
    pub issued_on: NaiveDate,
    pub file_name: String,
    pub size_kb: u32,
}

/// Учебные годы без повторов, новые сверху
pub fn available_years(documents: &[Document]) -> Vec<String> {
    let mut years: Vec<String> = documents.iter().map(|d| d.school_year.clone()).collect();
    years.sort_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

impl Filterable for Document {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_CATEGORY => Some(Cow::Borrowed(self.category.code())),
            FILTER_YEAR => Some(Cow::Borrowed(self.school_year.as_str())),
            _ => None,
        }
    }
}

impl Sortable for Document {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            SORT_TITLE => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            SORT_SIZE => self.size_kb.cmp(&other.size_kb),
            _ => self.issued_on.cmp(&other.issued_on),
        }
    }
}
