// File: console/src/config/mod.rs
pub mod manager;
use reqwest::Url;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

use crate::constants::refresh::DEFAULT_INTERVAL_MS;
use crate::errors::ConfigError;
use crate::store::UiFlags;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Origin the relative base paths are resolved against
    pub backend_url: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,
    #[serde(default = "default_autorefresh")]
    pub autorefresh: bool,
    #[serde(default)]
    pub expand_host: bool,
    #[serde(default)]
    pub expand_agents: bool,
}

fn default_refresh_interval() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_autorefresh() -> bool {
    true
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.origin()?;

        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn origin(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.backend_url).map_err(|e| ConfigError::InvalidValue {
            field: "backend_url".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn initial_flags(&self) -> UiFlags {
        UiFlags {
            expand_host: self.expand_host,
            expand_agents: self.expand_agents,
            autorefresh: self.autorefresh,
        }
    }
}
