//! Storage sink for generated PDFs.
//!
//! Renders hand finished bytes to a `StorageSink`; the sink decides where they
//! live and returns a location string for diagnostics and retirement.

mod local;
mod s3;

use async_trait::async_trait;
use thiserror::Error;

pub use local::LocalDiskStorage;
pub use s3::S3Storage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to persist {name}: {message}")]
    Persist { name: String, message: String },

    #[error("invalid object name: {0}")]
    InvalidName(String),

    #[error("S3 error: {0}")]
    S3(String),
}

#[async_trait]
pub trait StorageSink: Send + Sync {
    /// Stores `bytes` under `name` and returns the full storage location.
    async fn write(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError>;

    /// Reads a stored object back. `None` when it does not exist.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Removes a previously stored object. Missing objects are not an error.
    async fn delete(&self, name: &str) -> Result<(), StorageError>;
}

/// Rejects names that could escape the storage root.
pub(crate) fn validate_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.');
    if invalid {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}
