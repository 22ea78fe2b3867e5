use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unauthorized: remote operation without a valid session")]
    Unauthorized,

    #[error("snippet not found: {id}")]
    NotFound { id: String },

    #[error("invalid input: {0}")]
    Invalid(#[from] snipvault_core::error::CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("local store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
