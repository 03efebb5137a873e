use thiserror::Error;

pub type Result<T> = std::result::Result<T, MuroError>;

#[derive(Debug, Error)]
pub enum MuroError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
