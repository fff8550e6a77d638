//! Configuration module
//!
//! Settings are read from a TOML file (by default
//! `~/.config/content-delivery/config.toml`). Every section has defaults, so
//! an empty or partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::domain::CmsVersion;
use crate::infrastructure::serialization::SerializerFormat;

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub logging: LoggingConfig,
    #[validate(nested)]
    pub delivery: DeliveryConfig,
    #[validate(nested)]
    pub serializer: SerializerConfig,
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (overridden by `RUST_LOG`)
    #[validate(length(min = 1, message = "log level must not be empty"))]
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Content delivery settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DeliveryConfig {
    /// CMS server version whose query adapter is used
    pub cms_version: CmsVersion,
    /// Page size applied to queries that don't set one
    #[validate(range(min = 1, max = 1000, message = "default_page_size must be 1-1000"))]
    pub default_page_size: u32,
    /// Upper bound on results per query; 0 means unlimited
    pub max_results: u32,
    /// Publication queries are scoped to when they don't name one
    pub publication_id: Option<u32>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            cms_version: CmsVersion::Web8,
            default_page_size: 10,
            max_results: 0,
            publication_id: None,
        }
    }
}

/// Content model serializer settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SerializerConfig {
    pub format: SerializerFormat,
    /// Indent output (JSON only)
    pub pretty: bool,
    /// A disabled backend reports itself unavailable
    pub enabled: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            format: SerializerFormat::Json,
            pretty: false,
            enabled: true,
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("content-delivery")
        .join("config.toml")
}
