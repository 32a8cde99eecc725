mod language_tag;
mod normalized_audio;
mod pcm_audio;
mod storage_key;
mod transcription_record;
mod uploaded_audio;

pub use language_tag::{LanguageTag, UnknownLanguage};
pub use normalized_audio::{
    CANONICAL_CONTENT_TYPE, CANONICAL_EXTENSION, Normalization, NormalizedAudio,
};
pub use pcm_audio::PcmAudio;
pub use storage_key::{StorageKey, StorageKeyError};
pub use transcription_record::{TranscriptionRecord, TranslationDownload};
pub use uploaded_audio::{DeclaredFormat, UploadedAudio};
