use std::fmt;

use uuid::Uuid;

use super::language_tag::LanguageTag;
use super::normalized_audio::CANONICAL_EXTENSION;

const SEPARATOR: &str = "__";

/// Object name for stored audio: `{language}__{uuid}.wav`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    raw: String,
    language: LanguageTag,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageKeyError {
    #[error("missing language separator in key: {0}")]
    MissingSeparator(String),
    #[error("unknown language prefix in key: {0}")]
    UnknownLanguage(String),
    #[error("unexpected extension in key: {0}")]
    UnexpectedExtension(String),
    #[error("empty token in key: {0}")]
    EmptyToken(String),
}

impl StorageKey {
    pub fn generate(language: LanguageTag) -> Self {
        Self::with_token(language, &Uuid::new_v4().to_string())
    }

    fn with_token(language: LanguageTag, token: &str) -> Self {
        Self {
            raw: format!(
                "{}{}{}.{}",
                language.code(),
                SEPARATOR,
                token,
                CANONICAL_EXTENSION
            ),
            language,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, StorageKeyError> {
        let (prefix, rest) = raw
            .split_once(SEPARATOR)
            .ok_or_else(|| StorageKeyError::MissingSeparator(raw.to_string()))?;
        let language: LanguageTag = prefix
            .parse()
            .map_err(|_| StorageKeyError::UnknownLanguage(raw.to_string()))?;
        let token = rest
            .strip_suffix(CANONICAL_EXTENSION)
            .and_then(|t| t.strip_suffix('.'))
            .ok_or_else(|| StorageKeyError::UnexpectedExtension(raw.to_string()))?;
        if token.is_empty() {
            return Err(StorageKeyError::EmptyToken(raw.to_string()));
        }
        Ok(Self::with_token(language, token))
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn token(&self) -> &str {
        let start = self.language.code().len() + SEPARATOR.len();
        let end = self.raw.len() - CANONICAL_EXTENSION.len() - 1;
        &self.raw[start..end]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
