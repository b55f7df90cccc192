//! Configuration module for tracedash
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`TRACEDASH_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use tracedash::config::DashboardConfig;
//!
//! let config = DashboardConfig::default();
//! assert_eq!(config.dashboard.page_size, 10);
//!
//! let toml = r#"
//! [api]
//! base_url = "http://analytics.internal:9000"
//! "#;
//! let config: DashboardConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.api.base_url, "http://analytics.internal:9000");
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod notifications;

pub use api::ApiConfig;
pub use dashboard::{DashboardSettings, API_MAX_LIMIT};
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use notifications::NotificationsConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the dashboard client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Trace endpoint location and credentials
    pub api: ApiConfig,
    /// Load limits and table layout
    pub dashboard: DashboardSettings,
    /// Toast behaviour
    pub notifications: NotificationsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("TRACEDASH_API_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        if let Ok(limit) = std::env::var("TRACEDASH_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.dashboard.default_limit = l;
            }
        }

        if let Ok(level) = std::env::var("TRACEDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TRACEDASH_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }

        let dashboard = &self.dashboard;
        if dashboard.max_limit == 0 || dashboard.max_limit > API_MAX_LIMIT {
            return Err(ConfigError::Validation {
                field: "dashboard.max_limit".to_string(),
                message: format!("must be between 1 and {}", API_MAX_LIMIT),
            });
        }
        if dashboard.default_limit == 0 || dashboard.default_limit > dashboard.max_limit {
            return Err(ConfigError::Validation {
                field: "dashboard.default_limit".to_string(),
                message: format!("must be between 1 and {}", dashboard.max_limit),
            });
        }
        if dashboard.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "dashboard.page_size".to_string(),
                message: "page size must be non-zero".to_string(),
            });
        }

        if self.notifications.capacity == 0 {
            return Err(ConfigError::Validation {
                field: "notifications.capacity".to_string(),
                message: "capacity must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
