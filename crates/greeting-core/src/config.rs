//! Configuration module
//!
//! Host settings: where the configuration record and the uploaded images live.
//! These are read from the environment by the host binary; the storage and
//! processing crates receive plain paths and never look at the environment.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{ASSET_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_STORAGE_ROOT};

/// Raw `GREETING_*` environment variables
#[derive(Debug, Deserialize)]
struct EnvSettings {
    #[serde(default = "default_storage_root")]
    storage_root: PathBuf,
    #[serde(default = "default_config_file")]
    config_file: String,
    #[serde(default = "default_asset_dir")]
    asset_dir: String,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_ROOT)
}

fn default_config_file() -> String {
    CONFIG_FILE_NAME.to_string()
}

fn default_asset_dir() -> String {
    ASSET_DIR_NAME.to_string()
}

/// Storage layout and environment of the running host
#[derive(Clone, Debug)]
pub struct Config {
    pub storage_root: PathBuf,
    pub config_file_name: String,
    pub asset_dir_name: String,
    pub environment: String,
}

impl Config {
    /// Load from `GREETING_STORAGE_ROOT`, `GREETING_CONFIG_FILE`, `GREETING_ASSET_DIR`
    /// and `ENVIRONMENT`, reading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let settings: EnvSettings = envy::prefixed("GREETING_")
            .from_env()
            .map_err(|e| anyhow::anyhow!("Invalid GREETING_* environment: {}", e))?;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let config = Config {
            storage_root: settings.storage_root,
            config_file_name: settings.config_file,
            asset_dir_name: settings.asset_dir,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default layout under an explicit storage root
    pub fn with_root(storage_root: impl Into<PathBuf>) -> Self {
        Config {
            storage_root: storage_root.into(),
            config_file_name: CONFIG_FILE_NAME.to_string(),
            asset_dir_name: ASSET_DIR_NAME.to_string(),
            environment: "development".to_string(),
        }
    }

    /// Both names must be single path components inside the storage root
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        for (var, name) in [
            ("GREETING_CONFIG_FILE", &self.config_file_name),
            ("GREETING_ASSET_DIR", &self.asset_dir_name),
        ] {
            let is_single_component = Path::new(name)
                .file_name()
                .is_some_and(|component| component == name.as_str());
            if name.is_empty() || !is_single_component {
                return Err(anyhow::anyhow!(
                    "{} must be a plain file or directory name, got {:?}",
                    var,
                    name
                ));
            }
        }
        if self.config_file_name == self.asset_dir_name {
            return Err(anyhow::anyhow!(
                "GREETING_CONFIG_FILE and GREETING_ASSET_DIR must differ"
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Location of the configuration record
    pub fn config_path(&self) -> PathBuf {
        self.storage_root.join(&self.config_file_name)
    }

    /// Directory holding uploaded images
    pub fn asset_root(&self) -> PathBuf {
        self.storage_root.join(&self.asset_dir_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::with_root(DEFAULT_STORAGE_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(
            config.config_path(),
            PathBuf::from("saved_birthday_data").join("config.json")
        );
        assert_eq!(
            config.asset_root(),
            PathBuf::from("saved_birthday_data").join("images")
        );
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nested_names() {
        let mut config = Config::with_root("/tmp/greeting");
        config.config_file_name = "../config.json".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::with_root("/tmp/greeting");
        config.asset_dir_name = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::with_root("/tmp/greeting");
        config.asset_dir_name = "config.json".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::default();
        config.environment = "Prod".to_string();
        assert!(config.is_production());
    }
}
