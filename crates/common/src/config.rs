//! Configuration management for the application.
//!
//! This module provides a centralized configuration system that loads
//! settings from environment variables and configuration files. The
//! in-scope settings cover the service identity, telemetry, and the
//! event-admission limits; persistence and delivery subsystems are external
//! collaborators and configure themselves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub telemetry: TelemetrySettings,
    /// Bounds applied by the application layer on top of the domain rules
    #[serde(default)]
    pub events: EventLimits,
}

/// Service identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name used in logs and traces
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Deployment environment label (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Event-admission limits enforced by the application layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLimits {
    /// Largest capacity an organizer may request for a single event
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,

    /// Largest quantity a single registration may book
    #[serde(default = "default_max_group_size")]
    pub max_group_size: u32,
}

impl Default for EventLimits {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            max_group_size: default_max_group_size(),
        }
    }
}

// Default value functions
fn default_service_name() -> String {
    "community-events".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_capacity() -> u32 {
    10_000
}

fn default_max_group_size() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables and configuration files.
    ///
    /// The configuration is loaded in the following order (later sources
    /// override earlier ones):
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from APP_ENV)
    /// 4. Environment variables (prefixed with APP_)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use community_events_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Running as {}", config.service.name);
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            // Start with default configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add environment-specific configuration
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Add environment variables (prefix: APP_)
            // Example: APP_TELEMETRY__LOG_LEVEL=debug
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.service.name.is_empty() {
            anyhow::bail!("Service name is required");
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        if self.events.max_capacity == 0 {
            anyhow::bail!("Maximum event capacity must be greater than 0");
        }

        if self.events.max_group_size == 0 {
            anyhow::bail!("Maximum group size must be greater than 0");
        }

        Ok(())
    }

    /// Create a development configuration with sensible defaults
    pub fn development() -> Self {
        Self {
            service: ServiceSettings {
                name: "community-events-dev".to_string(),
                environment: "development".to_string(),
            },
            telemetry: TelemetrySettings {
                json_logging: false,
                log_level: "debug".to_string(),
            },
            events: EventLimits::default(),
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self {
            service: ServiceSettings {
                name: "community-events".to_string(),
                environment: "production".to_string(),
            },
            telemetry: TelemetrySettings {
                json_logging: true,
                log_level: "info".to_string(),
            },
            events: EventLimits::default(),
        }
    }
}
