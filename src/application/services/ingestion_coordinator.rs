use std::sync::Arc;

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::{LanguageTag, NormalizedAudio, StorageKey};

pub struct IngestionCoordinator {
    content_store: Arc<dyn ContentStore>,
}

impl IngestionCoordinator {
    pub fn new(content_store: Arc<dyn ContentStore>) -> Self {
        Self { content_store }
    }

    /// Stores the audio under a freshly minted key. Not retried on failure.
    pub async fn ingest(
        &self,
        audio: &NormalizedAudio,
        language: LanguageTag,
    ) -> Result<StorageKey, IngestError> {
        let key = StorageKey::generate(language);

        self.content_store
            .upsert_object(&key, audio.data().clone())
            .await?;

        tracing::info!(
            storage_key = %key,
            language = %language,
            bytes = audio.len(),
            "Audio stored"
        );

        Ok(key)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] ContentStoreError),
}
