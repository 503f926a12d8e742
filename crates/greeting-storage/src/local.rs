use crate::keys::asset_key;
use crate::traits::{AssetStore, StorageError, StorageResult};
use greeting_core::AssetRef;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Local filesystem asset store
#[derive(Clone, Debug)]
pub struct LocalAssetStore {
    base_path: PathBuf,
}

impl LocalAssetStore {
    /// Create a store rooted at `base_path` (e.g. "saved_birthday_data/images").
    ///
    /// Nothing is touched on disk until `ensure_ready` or `store` runs.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LocalAssetStore {
            base_path: base_path.into(),
        }
    }

    /// Convert a reference to its file path.
    ///
    /// Keys are single path components, so the result always sits directly under the
    /// base path.
    fn key_to_path(&self, reference: &str) -> StorageResult<(String, PathBuf)> {
        let key = asset_key(reference)?;
        let path = self.base_path.join(&key);
        Ok((key, path))
    }
}

impl AssetStore for LocalAssetStore {
    fn ensure_ready(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create asset directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    fn store(&self, file_name: &str, content: &[u8]) -> StorageResult<AssetRef> {
        let (key, path) = self.key_to_path(file_name)?;
        self.ensure_ready()?;

        let start = std::time::Instant::now();
        let replaced = path.exists();

        let mut file = fs::File::create(&path).map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(content).map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = content.len(),
            replaced,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Asset stored"
        );

        Ok(AssetRef::new(key))
    }

    fn load(&self, reference: &AssetRef) -> StorageResult<Option<Vec<u8>>> {
        let (key, path) = self.key_to_path(reference.as_str())?;
        let start = std::time::Instant::now();

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(key = %key, path = %path.display(), "Asset not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Asset loaded"
        );

        Ok(Some(data))
    }

    fn exists(&self, reference: &AssetRef) -> StorageResult<bool> {
        let (_, path) = self.key_to_path(reference.as_str())?;
        Ok(path.is_file())
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}
