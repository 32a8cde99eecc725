use bytes::Bytes;

use crate::domain::StorageKey;

#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Creates the object or replaces it if the key already exists.
    async fn upsert_object(&self, key: &StorageKey, data: Bytes) -> Result<(), ContentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("content store unavailable: {0}")]
    Unavailable(String),
    #[error("content store misconfigured: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
