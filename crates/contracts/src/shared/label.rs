use crate::enums::Language;
use serde::{Deserialize, Serialize};

/// Two-language display text (es-ES / en-US)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub es: String,
    pub en: String,
}

impl Label {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        lang.pick(&self.es, &self.en)
    }
}
