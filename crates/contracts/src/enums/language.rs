use serde::{Deserialize, Serialize};
use std::fmt;

/// Язык интерфейса портала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// Тег BCP 47 для форматирования дат и чисел
    pub fn code(&self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EsEs => "Español",
            Language::EnUs => "English",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::EsEs, Language::EnUs]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// Выбирает строку для этого языка
    pub fn pick<'a>(&self, es: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::EsEs => es,
            Language::EnUs => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn test_pick() {
        assert_eq!(Language::EsEs.pick("Hola", "Hello"), "Hola");
        assert_eq!(Language::EnUs.pick("Hola", "Hello"), "Hello");
    }
}
