//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Story API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    api_client::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        // Start with the config file if one exists, else defaults
        let mut config = match Self::find_config_file() {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)?;
                toml::from_str::<CliConfig>(&contents)?
            }
            None => Self::default(),
        };

        // Environment variables take precedence
        if let Ok(url) = std::env::var("HACKSNOOZE_API_URL") {
            config.api_base_url = url;
        }

        if let Ok(level) = std::env::var("HACKSNOOZE_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let locations = [
            PathBuf::from("hacksnooze.toml"),
            dirs::config_dir()
                .map(|p| p.join("hacksnooze").join("config.toml"))
                .unwrap_or_default(),
        ];

        locations.into_iter().find(|p| p.exists())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
