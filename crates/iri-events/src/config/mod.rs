//! # Report Configuration
//!
//! [`ReportConfig`] controls how event failures are emitted to the log:
//! the level used for real failures, the level used for the expected
//! timeout signal, the log target, and the default filter installed by
//! [`logging::init`](crate::logging::init).
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```toml
//! failure_level = "error"
//! timeout_level = "debug"
//! target = "iri_events"
//! log_filter = "info"
//! ```
pub mod error;

use std::fs;
use std::path::Path;

use log::Level;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Default log target for reported event failures
pub const DEFAULT_TARGET: &str = "iri_events";

/// Default filter directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "YAML",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// How event failures are reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Level for event and event server failures
    #[serde(with = "level_serde")]
    failure_level: Level,
    /// Level for the timeout signal
    #[serde(with = "level_serde")]
    timeout_level: Level,
    /// Log target
    target: String,
    /// Filter directive installed by `logging::init`
    log_filter: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            failure_level: Level::Error,
            timeout_level: Level::Debug,
            target: DEFAULT_TARGET.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ReportConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failure_level(&self) -> Level {
        self.failure_level
    }

    pub fn timeout_level(&self) -> Level {
        self.timeout_level
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn with_failure_level(mut self, level: Level) -> Self {
        self.failure_level = level;
        self
    }

    pub fn with_timeout_level(mut self, level: Level) -> Self {
        self.timeout_level = level;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let result = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        };
        result.map_err(|source| ConfigError::Serialization {
            format: format.name().to_string(),
            source,
        })
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let result = match format {
            ConfigFormat::Json => serde_json::from_str(data)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        };
        result.map_err(|source| ConfigError::Deserialization {
            format: format.name().to_string(),
            source,
        })
    }

    /// Load a configuration file, picking the format from its extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigError::UnsupportedFormat(
                path.extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )
        })?;

        let data = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(e, "read_config", path.to_path_buf()))?;

        let config = Self::deserialize(&data, format)?;
        log::debug!("Loaded report configuration from {}", path.display());
        Ok(config)
    }
}

// Levels are written lowercase and read case-insensitively.
mod level_serde {
    use log::Level;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(level: &Level, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&level.as_str().to_ascii_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid log level '{}'", value)))
    }
}
