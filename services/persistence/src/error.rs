//! Storage error taxonomy

use thiserror::Error;

/// Connectivity or transport failure from the document store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
