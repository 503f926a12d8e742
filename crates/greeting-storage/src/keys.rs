//! Asset key derivation shared by every store.
//!
//! A key is the final component of the upload filename. Both `/` and `\` count as
//! separators so names from any client, and path-style references written by older
//! records, reduce to the same key.

use crate::traits::{StorageError, StorageResult};

/// Derive the storage key for an upload filename or an existing reference.
pub fn asset_key(name: &str) -> StorageResult<String> {
    let key = name.rsplit(['/', '\\']).next().unwrap_or_default();

    if key.trim().is_empty() || key == "." || key == ".." {
        return Err(StorageError::InvalidKey(format!(
            "{:?} does not name a file",
            name
        )));
    }
    if key.contains('\0') {
        return Err(StorageError::InvalidKey(
            "Asset name contains invalid characters".to_string(),
        ));
    }

    Ok(key.to_string())
}
