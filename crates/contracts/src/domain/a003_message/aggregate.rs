use crate::enums::Language;
use crate::shared::list_query::Filterable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Tutoring,
    Administration,
    Teachers,
    Activities,
}

impl MessageCategory {
    pub fn code(&self) -> &'static str {
        match self {
            MessageCategory::Tutoring => "tutoring",
            MessageCategory::Administration => "administration",
            MessageCategory::Teachers => "teachers",
            MessageCategory::Activities => "activities",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            MessageCategory::Tutoring => lang.pick("Tutoría", "Tutoring"),
            MessageCategory::Administration => lang.pick("Secretaría", "Administration"),
            MessageCategory::Teachers => lang.pick("Profesorado", "Teachers"),
            MessageCategory::Activities => lang.pick("Actividades", "Activities"),
        }
    }

    pub fn all() -> Vec<MessageCategory> {
        vec![
            MessageCategory::Tutoring,
            MessageCategory::Administration,
            MessageCategory::Teachers,
            MessageCategory::Activities,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Read,
    Unread,
}

impl MessageStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MessageStatus::Read => "read",
            MessageStatus::Unread => "unread",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            MessageStatus::Read => lang.pick("Leído", "Read"),
            MessageStatus::Unread => lang.pick("No leído", "Unread"),
        }
    }

    pub fn all() -> Vec<MessageStatus> {
        vec![MessageStatus::Unread, MessageStatus::Read]
    }
}

/// Сообщение в почтовом ящике семьи/ученика
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub title: String,
    pub body: String,
    pub category: MessageCategory,
    pub status: MessageStatus,
    pub received_at: NaiveDateTime,
    pub has_attachment: bool,
}

impl Message {
    pub fn is_unread(&self) -> bool {
        self.status == MessageStatus::Unread
    }

    pub fn mark_read(&mut self) {
        self.status = MessageStatus::Read;
    }
}

impl Filterable for Message {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_CATEGORY => Some(Cow::Borrowed(self.category.code())),
            FILTER_STATUS => Some(Cow::Borrowed(self.status.code())),
            _ => None,
        }
    }
}
