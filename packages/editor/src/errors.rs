use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
