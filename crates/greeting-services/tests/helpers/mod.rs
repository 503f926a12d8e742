#![allow(dead_code)]

pub mod fixtures;

use greeting_core::Config;
use greeting_services::GreetingService;
use greeting_storage::{JsonConfigRepository, LocalAssetStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Service over a throwaway storage root
pub struct TestApp {
    pub service: GreetingService<LocalAssetStore, JsonConfigRepository>,
    pub config: Config,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn root(&self) -> &Path {
        self.config.storage_root()
    }

    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.config.asset_root().join(name)
    }

    /// A second service over the same root, as after a restart
    pub fn restart(&self) -> GreetingService<LocalAssetStore, JsonConfigRepository> {
        let service = GreetingService::from_config(&self.config);
        service.ensure_ready().unwrap();
        service
    }
}

/// Setup a service with the default layout under a temporary directory
pub fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::with_root(temp_dir.path().join("saved_birthday_data"));
    let service = GreetingService::from_config(&config);
    service.ensure_ready().unwrap();

    TestApp {
        service,
        config,
        _temp_dir: temp_dir,
    }
}
