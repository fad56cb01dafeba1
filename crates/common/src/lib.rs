//! Common utilities and shared functionality for the community events platform.
//!
//! This crate provides foundational utilities used across the services:
//! - Configuration management
//! - Telemetry and structured logging setup
//! - DateTime operations

pub mod config;
pub mod datetime;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, EventLimits, ServiceSettings, TelemetrySettings};
pub use datetime::{is_future, is_past, now_utc, same_calendar_day};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
