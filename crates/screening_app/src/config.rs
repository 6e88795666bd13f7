use std::fs;
use std::path::Path;
use std::time::Duration;

use screening_engine::TransportSettings;
use screening_logging::{screening_info, screening_warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "screening.ron";

/// Settings read from the optional RON config file. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let transport = TransportSettings::default();
        Self {
            endpoint: transport.endpoint,
            request_timeout_secs: transport.request_timeout.as_secs(),
            connect_timeout_secs: transport.connect_timeout.as_secs(),
            max_response_bytes: transport.max_response_bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(text)?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn transport_settings(
        &self,
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
    ) -> TransportSettings {
        TransportSettings {
            endpoint: endpoint.unwrap_or_else(|| self.endpoint.clone()),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(timeout_secs.unwrap_or(self.request_timeout_secs)),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

/// Loads the config file, falling back to defaults when it is absent or unusable.
pub fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            screening_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match AppConfig::parse(&content) {
        Ok(config) => {
            screening_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            screening_warn!("Ignoring config {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
