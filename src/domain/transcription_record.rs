use serde::{Deserialize, Serialize};

const TRANSLATION_SUFFIX: &str = "_traducao.txt";
const FALLBACK_FILE_STEM: &str = "audio";
const FALLBACK_LABEL: &str = "sem_nome";

/// A transcription written by the external transcription process.
///
/// Extra document fields (store metadata and the like) are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDownload {
    pub label: String,
    pub file_stem: String,
    pub file_name: String,
    pub content: String,
}

impl TranscriptionRecord {
    pub fn new(filename: impl Into<String>, transcription: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            transcription: Some(transcription.into()),
            translation: None,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn has_translation(&self) -> bool {
        self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn translation_download(&self) -> Option<TranslationDownload> {
        let content = self.translation.as_deref().filter(|t| !t.is_empty())?;
        let filename = self.filename.as_deref().filter(|f| !f.is_empty());
        let file_stem = filename.unwrap_or(FALLBACK_FILE_STEM);
        Some(TranslationDownload {
            label: filename.unwrap_or(FALLBACK_LABEL).to_string(),
            file_stem: file_stem.to_string(),
            file_name: format!("{}{}", file_stem, TRANSLATION_SUFFIX),
            content: content.to_string(),
        })
    }
}
