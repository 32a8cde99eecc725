use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::azure_store::AzureContentStore;
use super::local_store::LocalContentStore;
use super::memory_store::InMemoryContentStore;

pub struct ContentStoreFactory;

impl ContentStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ContentStore>, ContentStoreError> {
        match settings.provider {
            StorageProviderSetting::Azure => {
                let connection_string = settings
                    .connection_string
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| {
                        ContentStoreError::Configuration(
                            "storage connection_string required for azure provider".into(),
                        )
                    })?;
                let store =
                    AzureContentStore::from_connection_string(connection_string, &settings.container)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path).join(&settings.container);
                let store = LocalContentStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(InMemoryContentStore::new())),
        }
    }
}
