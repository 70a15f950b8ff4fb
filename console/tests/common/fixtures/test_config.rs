//! Config directory builder for tests that go through `ConfigManager`

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl TestConfigDir {
    /// Write `main_toml` into a fresh `config/main.toml`
    pub fn with_main(main_toml: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("main.toml"), main_toml).expect("Failed to write main.toml");
        Self { temp_dir }
    }

    /// Empty directory without a main.toml
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config dir");
        Self { temp_dir }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn config_dir_string(&self) -> String {
        self.config_dir().to_string_lossy().to_string()
    }
}
