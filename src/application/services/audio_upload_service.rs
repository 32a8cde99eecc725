use std::sync::Arc;

use crate::domain::{LanguageTag, StorageKey, UploadedAudio};

use super::audio_normalizer::{AudioNormalizer, NormalizeError};
use super::ingestion_coordinator::{IngestError, IngestionCoordinator};

#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub key: StorageKey,
    pub language: LanguageTag,
    pub transcoded: bool,
    pub size_bytes: u64,
}

pub struct AudioUploadService {
    normalizer: Arc<AudioNormalizer>,
    coordinator: IngestionCoordinator,
}

impl AudioUploadService {
    pub fn new(normalizer: Arc<AudioNormalizer>, coordinator: IngestionCoordinator) -> Self {
        Self {
            normalizer,
            coordinator,
        }
    }

    pub async fn upload(
        &self,
        audio: UploadedAudio,
        language: LanguageTag,
    ) -> Result<UploadReceipt, UploadError> {
        let UploadedAudio {
            data,
            content_type,
            filename,
        } = audio;

        tracing::debug!(
            filename = filename.as_deref().unwrap_or("<none>"),
            content_type = %content_type,
            bytes = data.len(),
            language = %language,
            "Normalizing upload"
        );

        let normalizer = Arc::clone(&self.normalizer);
        let normalized =
            tokio::task::spawn_blocking(move || normalizer.normalize(&data, &content_type))
                .await
                .map_err(|e| UploadError::Interrupted(e.to_string()))??;

        let key = self.coordinator.ingest(&normalized, language).await?;

        Ok(UploadReceipt {
            key,
            language,
            transcoded: normalized.was_transcoded(),
            size_bytes: normalized.len() as u64,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("upload interrupted: {0}")]
    Interrupted(String),
}
