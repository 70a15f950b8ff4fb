// File: console/src/config/manager.rs
use super::ConsoleConfig;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

pub struct ConfigManager {
    current_config: Arc<ConsoleConfig>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<ConsoleConfig> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<ConsoleConfig> {
        let main_config_path = format!("{}/main.toml", config_dir);
        let main_config_content = fs::read_to_string(&main_config_path).await
            .map_err(|e| anyhow!("Failed to read main config {}: {}", main_config_path, e))?;

        let config: ConsoleConfig = toml::from_str(&main_config_content)
            .map_err(|e| anyhow!("Failed to parse main config: {}", e))?;

        config.validate()
            .map_err(|e| anyhow!("Invalid main config {}: {}", main_config_path, e))?;

        info!("Loaded console config: backend {}, refresh every {}ms, autorefresh {}",
            config.backend_url,
            config.refresh_interval_ms,
            config.autorefresh
        );

        Ok(config)
    }
}
