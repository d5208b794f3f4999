use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database unavailable ({}): {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("An animal with Tag ID {0} already exists")]
    DuplicateId(i32),

    #[error("Database error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl WatsError {
    pub fn validation(message: impl Into<String>) -> Self {
        WatsError::Validation(message.into())
    }

    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        WatsError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<rusqlite::Error> for WatsError {
    fn from(err: rusqlite::Error) -> Self {
        WatsError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WatsError>;
