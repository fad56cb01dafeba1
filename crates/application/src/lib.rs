//! Application layer for the community events platform
//!
//! This crate orchestrates domain logic and coordinates between layers.
//!
//! ## Architecture
//!
//! The application layer sits between the domain and its hosts, providing
//! use case orchestration: every mutation of an event aggregate is funneled
//! through [`services::EventService`], which drains the aggregate's buffered
//! domain events after each successful operation and hands them to an
//! outbox-style publisher port.
//!
//! ## Modules
//!
//! - `services` - Business logic services and the ports they depend on
//! - `validation` - Input validation framework
//! - `dto` - Data transfer objects for host layers

pub mod dto;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use dto::{EventDto, RegistrationDto};
pub use services::{
    DomainEventPublisher, EventRepositoryPort, EventService, NoOpDomainEventPublisher,
    ServiceContext,
};
pub use validation::{ValidationResult, ValidatorExt};

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid input data
    #[error("{0}")]
    InvalidInput(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Operation conflicts with the aggregate's current state
    #[error("{0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// External collaborator unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::NotFound(_) => 404,
            ApplicationError::InvalidInput(_) => 400,
            ApplicationError::ValidationFailed(_) => 422,
            ApplicationError::Conflict(_) => 409,
            ApplicationError::Internal(_) => 500,
            ApplicationError::ServiceUnavailable(_) => 503,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApplicationError::ServiceUnavailable(_))
    }

    /// Get error code for host responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApplicationError::Conflict(_) => "CONFLICT",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
            ApplicationError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
