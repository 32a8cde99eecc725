use std::sync::Arc;

use bytes::Bytes;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::StorageKey;
use crate::infrastructure::connection_string::ConnectionString;

/// Azure Blob Storage container, addressed through `object_store`.
pub struct AzureContentStore {
    inner: Arc<dyn ObjectStore>,
    container: String,
}

impl AzureContentStore {
    pub fn new(account: &str, access_key: &str, container: &str) -> Result<Self, ContentStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            container: container.to_string(),
        })
    }

    /// Accepts account-key connection strings and `UseDevelopmentStorage=true` (Azurite).
    pub fn from_connection_string(
        connection_string: &str,
        container: &str,
    ) -> Result<Self, ContentStoreError> {
        let parsed = ConnectionString::parse(connection_string)
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;

        if parsed.flag("UseDevelopmentStorage") {
            let store = MicrosoftAzureBuilder::new()
                .with_use_emulator(true)
                .with_container_name(container)
                .build()
                .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;
            return Ok(Self {
                inner: Arc::new(store),
                container: container.to_string(),
            });
        }

        let account = parsed
            .require("AccountName")
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;
        let key = parsed
            .require("AccountKey")
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;

        Self::new(account, key, container)
    }

    pub fn container(&self) -> &str {
        &self.container
    }
}

#[async_trait::async_trait]
impl ContentStore for AzureContentStore {
    async fn upsert_object(&self, key: &StorageKey, data: Bytes) -> Result<(), ContentStoreError> {
        let store_path = StorePath::from(key.as_str());
        let size = data.len();

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?;

        tracing::debug!(
            container = %self.container,
            blob = %store_path,
            bytes = size,
            "Blob upserted"
        );

        Ok(())
    }
}
