use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api::{ApiConfig, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "linode-records.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/linode-records/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Linode API access
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. linode-records.toml in current directory
    /// 3. /etc/linode-records/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.api_url {
            self.api.url = url;
        }
        if let Some(token) = overrides.token {
            self.api.token = Some(token);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation("API URL cannot be empty".to_string()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "API URL '{}' must start with http:// or https://",
                url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "API timeout cannot be 0".to_string(),
            ));
        }

        if let Some(size) = self.api.page_size {
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
                return Err(ConfigError::Validation(format!(
                    "Page size {} is outside {}..={}",
                    size, MIN_PAGE_SIZE, MAX_PAGE_SIZE
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
