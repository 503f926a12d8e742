//! Single-slot persistence for the configuration record.
//!
//! The record is stored as pretty-printed UTF-8 JSON. Saves go through a temporary
//! file in the same directory that is renamed over the target, so a crash mid-save
//! leaves either the old record or the new one, never a truncated file. There is no
//! backup and no guard against two writers: the last save wins.

use greeting_core::{AppError, Configuration};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use validator::Validate;

/// Configuration persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to write configuration: {0}")]
    WriteFailed(String),

    #[error("Failed to read configuration: {0}")]
    ReadFailed(String),

    #[error("Configuration file is corrupt: {0}")]
    Corrupt(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::WriteFailed(msg) => AppError::StorageWrite(msg),
            ConfigError::ReadFailed(msg) => AppError::StorageRead(msg),
            ConfigError::Corrupt(msg) => AppError::ConfigCorrupt(msg),
            ConfigError::Invalid(msg) => AppError::InvalidInput(msg),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The saved record
    Saved,
    /// Built-in defaults, nothing saved yet
    Defaults,
    /// Built-in defaults because the saved record could not be read
    Fallback,
}

/// Result of `ConfigRepository::load_or_default`
#[derive(Debug)]
pub struct LoadedConfiguration {
    pub configuration: Configuration,
    pub source: ConfigSource,
    /// Why the saved record was ignored, when `source` is `Fallback`
    pub warning: Option<ConfigError>,
}

/// Durable single-slot storage for the configuration record
pub trait ConfigRepository: Send + Sync {
    /// Load the saved record. `Ok(None)` on first run.
    fn load(&self) -> Result<Option<Configuration>, ConfigError>;

    /// Replace the saved record with `configuration`
    fn save(&self, configuration: &Configuration) -> Result<(), ConfigError>;

    /// Load the saved record, falling back to built-in defaults.
    ///
    /// Never fails: a corrupt or unreadable file is reported through `warning`.
    fn load_or_default(&self) -> LoadedConfiguration {
        match self.load() {
            Ok(Some(configuration)) => LoadedConfiguration {
                configuration,
                source: ConfigSource::Saved,
                warning: None,
            },
            Ok(None) => LoadedConfiguration {
                configuration: Configuration::defaults(),
                source: ConfigSource::Defaults,
                warning: None,
            },
            Err(err) => LoadedConfiguration {
                configuration: Configuration::defaults(),
                source: ConfigSource::Fallback,
                warning: Some(err),
            },
        }
    }
}

/// JSON file implementation of `ConfigRepository`
#[derive(Clone, Debug)]
pub struct JsonConfigRepository {
    path: PathBuf,
}

impl JsonConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_atomically(&self, json: &str) -> io::Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Option<Configuration>, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No saved configuration");
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigError::ReadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let configuration = Configuration::from_json(&content)
            .map_err(|e| ConfigError::Corrupt(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!(
            path = %self.path.display(),
            images = configuration.image_paths.len(),
            "Configuration loaded"
        );

        Ok(Some(configuration))
    }

    fn save(&self, configuration: &Configuration) -> Result<(), ConfigError> {
        configuration
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let json = configuration
            .to_json()
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to encode record: {}", e)))?;

        let start = std::time::Instant::now();

        self.write_atomically(&json).map_err(|e| {
            ConfigError::WriteFailed(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::info!(
            path = %self.path.display(),
            size_bytes = json.len(),
            images = configuration.image_paths.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Configuration saved"
        );

        Ok(())
    }
}
