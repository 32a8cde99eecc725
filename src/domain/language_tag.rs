use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Spoken language declared by the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageTag {
    PtPt,
    PtBr,
    EnUs,
    EsEs,
    FrFr,
}

impl LanguageTag {
    pub const ALL: [LanguageTag; 5] = [
        LanguageTag::PtPt,
        LanguageTag::PtBr,
        LanguageTag::EnUs,
        LanguageTag::EsEs,
        LanguageTag::FrFr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageTag::PtPt => "pt-PT",
            LanguageTag::PtBr => "pt-BR",
            LanguageTag::EnUs => "en-US",
            LanguageTag::EsEs => "es-ES",
            LanguageTag::FrFr => "fr-FR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageTag::PtPt => "Português (PT)",
            LanguageTag::PtBr => "Português (BR)",
            LanguageTag::EnUs => "English (US)",
            LanguageTag::EsEs => "Español (ES)",
            LanguageTag::FrFr => "Français (FR)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageTag {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.code() == trimmed)
            .ok_or_else(|| UnknownLanguage(trimmed.to_string()))
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = UnknownLanguage;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.code().to_string()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
