use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

/// JSON array of transcription documents on disk, re-read on every listing.
pub struct JsonFileTranscriptionRepository {
    path: PathBuf,
}

impl JsonFileTranscriptionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TranscriptionRepository for JsonFileTranscriptionRepository {
    async fn list_all(&self) -> Result<Vec<TranscriptionRecord>, RepositoryError> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            RepositoryError::ConnectionFailed(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&data).map_err(|e| {
            RepositoryError::InvalidResponse(format!("{}: {}", self.path.display(), e))
        })
    }
}
