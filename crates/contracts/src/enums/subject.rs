use super::Language;
use serde::{Deserialize, Serialize};

/// School subjects shared by grades, absences and homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Spanish,
    English,
    Science,
    History,
    PhysicalEducation,
    Music,
    Art,
}

impl Subject {
    pub fn code(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Spanish => "spanish",
            Subject::English => "english",
            Subject::Science => "science",
            Subject::History => "history",
            Subject::PhysicalEducation => "physical_education",
            Subject::Music => "music",
            Subject::Art => "art",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Subject::Mathematics => lang.pick("Matemáticas", "Mathematics"),
            Subject::Spanish => lang.pick("Lengua Castellana", "Spanish Language"),
            Subject::English => lang.pick("Inglés", "English"),
            Subject::Science => lang.pick("Ciencias Naturales", "Science"),
            Subject::History => lang.pick("Geografía e Historia", "History"),
            Subject::PhysicalEducation => lang.pick("Educación Física", "Physical Education"),
            Subject::Music => lang.pick("Música", "Music"),
            Subject::Art => lang.pick("Educación Plástica", "Art"),
        }
    }

    pub fn all() -> Vec<Subject> {
        vec![
            Subject::Mathematics,
            Subject::Spanish,
            Subject::English,
            Subject::Science,
            Subject::History,
            Subject::PhysicalEducation,
            Subject::Music,
            Subject::Art,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Subject::all().into_iter().find(|s| s.code() == code)
    }
}
