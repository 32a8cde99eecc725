use std::sync::Arc;

use crate::application::ports::{ConfigurationError, TranscriptionRepository};
use crate::presentation::config::{DocumentStoreProviderSetting, DocumentStoreSettings};

use super::cosmos_transcription_repository::CosmosTranscriptionRepository;
use super::json_file_transcription_repository::JsonFileTranscriptionRepository;

pub struct TranscriptionRepositoryFactory;

impl TranscriptionRepositoryFactory {
    pub fn create(
        settings: &DocumentStoreSettings,
    ) -> Result<Arc<dyn TranscriptionRepository>, ConfigurationError> {
        match settings.provider {
            DocumentStoreProviderSetting::Cosmos => {
                let connection_string = present(&settings.connection_string);
                let database = present(&settings.database);
                let collection = present(&settings.collection);

                match (connection_string, database, collection) {
                    (Some(conn), Some(db), Some(coll)) => {
                        let repository =
                            CosmosTranscriptionRepository::from_connection_string(conn, db, coll)?;
                        Ok(Arc::new(repository))
                    }
                    _ => {
                        let missing: Vec<&str> = [
                            ("connection_string", connection_string),
                            ("database", database),
                            ("collection", collection),
                        ]
                        .into_iter()
                        .filter(|(_, value)| value.is_none())
                        .map(|(name, _)| name)
                        .collect();
                        Err(ConfigurationError(format!(
                            "cosmos document store missing {}",
                            missing.join(", ")
                        )))
                    }
                }
            }
            DocumentStoreProviderSetting::Local => {
                let path = present(&settings.local_path).ok_or_else(|| {
                    ConfigurationError("local document store requires local_path".into())
                })?;
                Ok(Arc::new(JsonFileTranscriptionRepository::new(path)))
            }
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
