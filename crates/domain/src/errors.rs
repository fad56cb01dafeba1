//! Error types for the community events domain.
//!
//! Every guarded operation rejects invalid input or a wrong lifecycle state
//! through the `Result` channel; the `Display` renderings below are the
//! messages surfaced verbatim to callers. No failure in this crate is
//! transient: a rejected call stays rejected for the same state and clock
//! reading.

use crate::registration::RegistrationStatus;

/// Top-level domain error type
///
/// Aggregates the per-component errors so callers that span components can
/// handle a single type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Event aggregate errors
    #[error(transparent)]
    Event(#[from] EventError),

    /// Registration entity errors
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Pricing policy errors
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Scheduling conflict check errors
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Event aggregate errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// Title missing or blank
    #[error("Event title is required")]
    EmptyTitle,

    /// Description missing or blank
    #[error("Event description is required")]
    EmptyDescription,

    /// End date not strictly after start date
    #[error("End date must be after start date")]
    EndBeforeStart,

    /// Start date already passed at creation time
    #[error("Start date cannot be in the past")]
    StartInPast,

    /// Capacity zero or reduced to zero
    #[error("Capacity must be greater than 0")]
    NonPositiveCapacity,

    /// Capacity reduction would strand admitted registrations
    #[error("Cannot reduce capacity below current registrations")]
    CapacityBelowRegistrations,

    /// Publish called on an already-published event
    #[error("Event is already published")]
    AlreadyPublished,

    /// Publish called from a non-draft, non-published state
    #[error("Only draft events can be published")]
    NotDraft,

    /// Review submission outside of draft
    #[error("Only draft events can be submitted for review")]
    NotDraftForReview,

    /// Activation outside of published
    #[error("Only published events can be activated")]
    NotPublishedForActivation,

    /// Activation attempted before the event starts
    #[error("Event cannot be activated before start date")]
    ActivationBeforeStart,

    /// Postponement outside of published
    #[error("Only published events can be postponed")]
    NotPublishedForPostponement,

    /// Postponement without a reason
    #[error("Postponement reason is required")]
    EmptyPostponementReason,

    /// Cancellation outside of published
    #[error("Only published events can be cancelled")]
    NotPublishedForCancellation,

    /// Archival outside of completed
    #[error("Only completed events can be archived")]
    NotCompletedForArchival,

    /// Registration against a non-published event
    #[error("Cannot register for unpublished event")]
    NotPublishedForRegistration,

    /// A second active registration for the same user
    #[error("User is already registered for this event")]
    DuplicateRegistration,

    /// Admission would exceed the capacity bound
    #[error("Event is at full capacity")]
    FullCapacity,

    /// Cancellation for a user with no active registration
    #[error("User is not registered for this event")]
    NotRegistered,

    /// Errors raised by the owned registration entity
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Registration entity errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Transition not on the allowed graph
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: RegistrationStatus,
        to: RegistrationStatus,
    },

    /// Check-in outside of confirmed
    #[error("Only confirmed registrations can be checked in")]
    NotConfirmed,

    /// Attendance completion outside of checked-in
    #[error("Only checked-in registrations can be completed")]
    NotCheckedIn,

    /// Zero-quantity registration
    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity,
}

/// Pricing policy errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// Quoted quantity must be positive
    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity,

    /// Base price missing or non-positive at construction
    #[error("Base price must be greater than zero")]
    NonPositiveBasePrice,

    /// Discount percent outside [0, 100]
    #[error("Discount percent must be between 0 and 100")]
    DiscountOutOfRange,

    /// Group discounts need a group of at least two
    #[error("Minimum group size must be greater than 1")]
    GroupSizeTooSmall,
}

/// Scheduling conflict check errors
///
/// `NoConflict` is the legacy negative-signal outcome of
/// [`crate::event::Event::has_scheduling_conflict`]; see that method for the
/// polarity contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Counterpart event was not supplied
    #[error("Cannot check conflict with null event")]
    MissingCounterpart,

    /// The two schedules do not overlap
    #[error("No scheduling conflict")]
    NoConflict,
}

/// Domain-wide result type
pub type DomainResult<T> = Result<T, DomainError>;
