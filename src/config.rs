// Configuration for the demo binaries and the validating email sender.
// Loaded from TOML; every field has a default so an empty file is valid.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_FROM: &str = "noreply@university.edu";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_filter: String,
    pub sender: SenderConfig,
}

/// Rules used by `ValidatingEmailSender` to simulate delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Sender used when a request carries no `from` address.
    pub default_from: String,
    /// Recipients containing this text cannot receive mail.
    pub blocked_marker: String,
    /// Recipients containing this text simulate a delivery failure.
    pub failure_marker: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sender: SenderConfig::default(),
        }
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        SenderConfig {
            default_from: DEFAULT_FROM.to_string(),
            blocked_marker: "blocked".to_string(),
            failure_marker: "error@".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(invalid("log_filter", "must not be empty"));
        }
        self.sender.validate()
    }
}

impl SenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_from.trim().is_empty() {
            return Err(invalid("sender.default_from", "must not be empty"));
        }
        // An empty marker would match every address.
        if self.blocked_marker.is_empty() {
            return Err(invalid("sender.blocked_marker", "must not be empty"));
        }
        if self.failure_marker.is_empty() {
            return Err(invalid("sender.failure_marker", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
