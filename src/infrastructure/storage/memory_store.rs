use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::StorageKey;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    inner: InMemory,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch(&self, key: &StorageKey) -> Result<Bytes, ContentStoreError> {
        let result = self
            .inner
            .get(&StorePath::from(key.as_str()))
            .await
            .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?;

        result
            .bytes()
            .await
            .map_err(|e| ContentStoreError::Unavailable(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upsert_object(&self, key: &StorageKey, data: Bytes) -> Result<(), ContentStoreError> {
        self.inner
            .put(&StorePath::from(key.as_str()), PutPayload::from(data))
            .await
            .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
