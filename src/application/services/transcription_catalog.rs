use std::sync::Arc;

use crate::application::ports::{ConfigurationError, RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("document store unavailable: {0}")]
    StoreUnavailable(#[from] RepositoryError),
}

/// Result of a listing. Failures come back as `error` next to an empty record list.
#[derive(Debug, Default)]
pub struct TranscriptionListing {
    pub records: Vec<TranscriptionRecord>,
    pub error: Option<CatalogError>,
}

impl TranscriptionListing {
    fn failed(error: CatalogError) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_exportable(&self) -> bool {
        self.error.is_none() && !self.records.is_empty()
    }
}

pub struct TranscriptionCatalog {
    source: Result<Arc<dyn TranscriptionRepository>, ConfigurationError>,
}

impl TranscriptionCatalog {
    pub fn new(repository: Arc<dyn TranscriptionRepository>) -> Self {
        Self {
            source: Ok(repository),
        }
    }

    pub fn unconfigured(error: ConfigurationError) -> Self {
        tracing::error!(error = %error, "Transcription listing disabled");
        Self { source: Err(error) }
    }

    pub async fn list(&self) -> TranscriptionListing {
        let repository = match &self.source {
            Ok(repository) => repository,
            Err(e) => return TranscriptionListing::failed(e.clone().into()),
        };

        match repository.list_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Transcriptions listed");
                TranscriptionListing {
                    records,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to list transcriptions");
                TranscriptionListing::failed(e.into())
            }
        }
    }
}
