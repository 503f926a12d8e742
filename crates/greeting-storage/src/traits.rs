//! Asset storage abstraction
//!
//! This module defines the `AssetStore` trait that asset backends implement.

use greeting_core::{AppError, AssetRef};
use std::path::Path;
use thiserror::Error;

/// Asset storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Invalid asset name: {0}")]
    InvalidKey(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::WriteFailed(msg) => AppError::StorageWrite(msg),
            StorageError::ReadFailed(msg) => AppError::StorageRead(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
        }
    }
}

/// Durable home for uploaded images.
///
/// A store knows nothing about the configuration record; the record only holds the
/// references a store hands out.
pub trait AssetStore: Send + Sync {
    /// Create the asset root (and its parents) if missing. Safe to call repeatedly.
    fn ensure_ready(&self) -> StorageResult<()>;

    /// Write `content` under a key derived from `file_name` and return its reference.
    ///
    /// An existing asset with the same key is overwritten.
    fn store(&self, file_name: &str, content: &[u8]) -> StorageResult<AssetRef>;

    /// Read an asset back. `Ok(None)` means the reference no longer resolves.
    fn load(&self, reference: &AssetRef) -> StorageResult<Option<Vec<u8>>>;

    /// Check whether a reference still resolves to a file
    fn exists(&self, reference: &AssetRef) -> StorageResult<bool>;

    /// Directory the assets live in
    fn root(&self) -> &Path;
}
