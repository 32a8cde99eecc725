#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Document store settings are missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("document store configuration error: {0}")]
pub struct ConfigurationError(pub String);
