//! Greeting Storage Library
//!
//! This crate persists the two kinds of durable state: uploaded image assets
//! (`AssetStore`, backed by `LocalAssetStore`) and the single configuration record
//! (`ConfigRepository`, backed by `JsonConfigRepository`).
//!
//! # Layout
//!
//! Both live under one storage root:
//!
//! - `{root}/config.json` holds the record
//! - `{root}/images/{filename}` holds each asset
//!
//! Asset keys are the final component of the upload filename. Key derivation is
//! centralized in the `keys` module.

pub mod config_repository;
pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use config_repository::{
    ConfigError, ConfigRepository, ConfigSource, JsonConfigRepository, LoadedConfiguration,
};
pub use local::LocalAssetStore;
pub use traits::{AssetStore, StorageError, StorageResult};
