use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::domain::StorageKey;

/// Directory on the local filesystem standing in for a blob container.
pub struct LocalContentStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalContentStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ContentStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn path_of(&self, key: &StorageKey) -> PathBuf {
        self.base_path.join(key.as_str())
    }
}

#[async_trait::async_trait]
impl ContentStore for LocalContentStore {
    async fn upsert_object(&self, key: &StorageKey, data: Bytes) -> Result<(), ContentStoreError> {
        let store_path = StorePath::from(key.as_str());

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?;

        tracing::debug!(path = %self.path_of(key).display(), "Audio written to local store");

        Ok(())
    }
}
