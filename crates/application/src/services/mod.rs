//! Application Services
//!
//! Business logic orchestration layer that coordinates domain operations,
//! repository access, and cross-cutting concerns.

mod events;

pub use events::*;

use crate::ApplicationError;
use async_trait::async_trait;
use community_events_domain::errors::{
    DomainError, EventError, PricingError, RegistrationError, ScheduleError,
};
use community_events_domain::events::DomainEvent;

/// Service context for request handling
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Request correlation ID for tracing
    pub correlation_id: String,
}

impl ServiceContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}

/// Outbox-style consumer of drained domain events.
///
/// The service drains the aggregate's buffer on the thread that performed
/// the mutation and hands the whole batch over, so consumers never observe
/// partial batches.
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    async fn publish_batch(&self, events: &[DomainEvent]) -> Result<(), ApplicationError>;
}

/// No-op event publisher for hosts without downstream consumers
pub struct NoOpDomainEventPublisher;

#[async_trait]
impl DomainEventPublisher for NoOpDomainEventPublisher {
    async fn publish_batch(&self, _events: &[DomainEvent]) -> Result<(), ApplicationError> {
        Ok(())
    }
}

/// Map a domain failure onto the application taxonomy, preserving the
/// domain's message verbatim.
///
/// Input validation failures become `InvalidInput`; state preconditions and
/// capacity exhaustion become `Conflict` (expected business outcomes, not
/// system faults).
pub(crate) fn map_domain_error(error: DomainError) -> ApplicationError {
    let message = error.to_string();
    match &error {
        DomainError::Event(event_error) => match event_error {
            EventError::EmptyTitle
            | EventError::EmptyDescription
            | EventError::EndBeforeStart
            | EventError::StartInPast
            | EventError::NonPositiveCapacity
            | EventError::EmptyPostponementReason => ApplicationError::InvalidInput(message),
            EventError::Registration(RegistrationError::NonPositiveQuantity) => {
                ApplicationError::InvalidInput(message)
            }
            _ => ApplicationError::Conflict(message),
        },
        DomainError::Registration(RegistrationError::NonPositiveQuantity) => {
            ApplicationError::InvalidInput(message)
        }
        DomainError::Registration(_) => ApplicationError::Conflict(message),
        DomainError::Pricing(PricingError::NonPositiveQuantity) => {
            ApplicationError::InvalidInput(message)
        }
        DomainError::Pricing(_) => ApplicationError::InvalidInput(message),
        DomainError::Schedule(ScheduleError::MissingCounterpart) => {
            ApplicationError::InvalidInput(message)
        }
        DomainError::Schedule(ScheduleError::NoConflict) => ApplicationError::Conflict(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_errors_map_to_conflict() {
        let err = map_domain_error(EventError::FullCapacity.into());
        assert!(matches!(err, ApplicationError::Conflict(_)));
        assert_eq!(err.to_string(), "Event is at full capacity");

        let err = map_domain_error(EventError::AlreadyPublished.into());
        assert!(matches!(err, ApplicationError::Conflict(_)));
    }

    #[test]
    fn test_input_errors_map_to_invalid_input() {
        let err = map_domain_error(EventError::EmptyTitle.into());
        assert!(matches!(err, ApplicationError::InvalidInput(_)));

        let err = map_domain_error(PricingError::NonPositiveQuantity.into());
        assert_eq!(err.to_string(), "Quantity must be greater than zero");
    }
}
