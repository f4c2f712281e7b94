use crate::enums::Language;
use crate::shared::list_query::{Filterable, Pinnable};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_AUDIENCE: &str = "audience";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementCategory {
    News,
    Event,
    Notice,
    Cafeteria,
}

impl AnnouncementCategory {
    pub fn code(&self) -> &'static str {
        match self {
            AnnouncementCategory::News => "news",
            AnnouncementCategory::Event => "event",
            AnnouncementCategory::Notice => "notice",
            AnnouncementCategory::Cafeteria => "cafeteria",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            AnnouncementCategory::News => lang.pick("Noticias", "News"),
            AnnouncementCategory::Event => lang.pick("Eventos", "Events"),
            AnnouncementCategory::Notice => lang.pick("Avisos", "Notices"),
            AnnouncementCategory::Cafeteria => lang.pick("Comedor", "Cafeteria"),
        }
    }

    pub fn all() -> Vec<AnnouncementCategory> {
        vec![
            AnnouncementCategory::News,
            AnnouncementCategory::Event,
            AnnouncementCategory::Notice,
            AnnouncementCategory::Cafeteria,
        ]
    }
}

/// Кому адресовано объявление. `everyone` является обычным значением,
/// а не маркером `all` фильтра.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Everyone,
    Primary,
    Secondary,
    Families,
}

impl Audience {
    pub fn code(&self) -> &'static str {
        match self {
            Audience::Everyone => "everyone",
            Audience::Primary => "primary",
            Audience::Secondary => "secondary",
            Audience::Families => "families",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Audience::Everyone => lang.pick("Toda la comunidad", "Everyone"),
            Audience::Primary => lang.pick("Primaria", "Primary"),
            Audience::Secondary => lang.pick("Secundaria", "Secondary"),
            Audience::Families => lang.pick("Familias", "Families"),
        }
    }

    pub fn all() -> Vec<Audience> {
        vec![
            Audience::Everyone,
            Audience::Primary,
            Audience::Secondary,
            Audience::Families,
        ]
    }
}

/// Объявление на доске (tablón)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: AnnouncementCategory,
    pub audience: Audience,
    pub author: String,
    pub published_at: NaiveDateTime,
    pub pinned: bool,
}

impl Filterable for Announcement {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            FILTER_CATEGORY => Some(Cow::Borrowed(self.category.code())),
            FILTER_AUDIENCE => Some(Cow::Borrowed(self.audience.code())),
            _ => None,
        }
    }
}

impl Pinnable for Announcement {
    fn is_pinned(&self) -> bool {
        self.pinned
    }

    fn sort_date(&self) -> NaiveDateTime {
        self.published_at
    }
}
