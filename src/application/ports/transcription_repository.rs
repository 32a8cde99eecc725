use async_trait::async_trait;

use crate::domain::TranscriptionRecord;

use super::RepositoryError;

/// Read-only view of the document store the transcription process writes to.
#[async_trait]
pub trait TranscriptionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<TranscriptionRecord>, RepositoryError>;
}
