//! Domain events recorded by the event aggregate.
//!
//! Every successful state-changing operation appends exactly one event to
//! the aggregate's [`DomainEventLog`]. Consumers (notification senders,
//! audit, an outbox writer) read the buffer, act on it, and drain it from
//! the same thread that performed the mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::{AttendeeId, EventId, OrganizerId};

/// A state change on the event aggregate, recorded for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    Published {
        event_id: EventId,
        published_by: OrganizerId,
        published_at: DateTime<Utc>,
    },
    SubmittedForReview {
        event_id: EventId,
        submitted_at: DateTime<Utc>,
        requires_cultural_approval: bool,
    },
    Activated {
        event_id: EventId,
        activated_at: DateTime<Utc>,
    },
    Postponed {
        event_id: EventId,
        reason: String,
        postponed_at: DateTime<Utc>,
    },
    Cancelled {
        event_id: EventId,
        reason: String,
        cancelled_at: DateTime<Utc>,
    },
    Archived {
        event_id: EventId,
        archived_at: DateTime<Utc>,
    },
    CapacityUpdated {
        event_id: EventId,
        previous_capacity: u32,
        new_capacity: u32,
        updated_at: DateTime<Utc>,
    },
    RegistrationConfirmed {
        event_id: EventId,
        attendee_id: AttendeeId,
        quantity: u32,
        registration_date: DateTime<Utc>,
    },
    RegistrationCancelled {
        event_id: EventId,
        attendee_id: AttendeeId,
        cancelled_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Stable event name for routing and outbox persistence.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Published { .. } => "event.published",
            Self::SubmittedForReview { .. } => "event.submitted_for_review",
            Self::Activated { .. } => "event.activated",
            Self::Postponed { .. } => "event.postponed",
            Self::Cancelled { .. } => "event.cancelled",
            Self::Archived { .. } => "event.archived",
            Self::CapacityUpdated { .. } => "event.capacity_updated",
            Self::RegistrationConfirmed { .. } => "event.registration_confirmed",
            Self::RegistrationCancelled { .. } => "event.registration_cancelled",
        }
    }

    /// Id of the aggregate this event belongs to.
    pub fn event_id(&self) -> EventId {
        match self {
            Self::Published { event_id, .. }
            | Self::SubmittedForReview { event_id, .. }
            | Self::Activated { event_id, .. }
            | Self::Postponed { event_id, .. }
            | Self::Cancelled { event_id, .. }
            | Self::Archived { event_id, .. }
            | Self::CapacityUpdated { event_id, .. }
            | Self::RegistrationConfirmed { event_id, .. }
            | Self::RegistrationCancelled { event_id, .. } => *event_id,
        }
    }

    /// When the recorded change happened.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Published { published_at, .. } => *published_at,
            Self::SubmittedForReview { submitted_at, .. } => *submitted_at,
            Self::Activated { activated_at, .. } => *activated_at,
            Self::Postponed { postponed_at, .. } => *postponed_at,
            Self::Cancelled { cancelled_at, .. } => *cancelled_at,
            Self::Archived { archived_at, .. } => *archived_at,
            Self::CapacityUpdated { updated_at, .. } => *updated_at,
            Self::RegistrationConfirmed {
                registration_date, ..
            } => *registration_date,
            Self::RegistrationCancelled { cancelled_at, .. } => *cancelled_at,
        }
    }
}

/// Append-only buffer of domain events owned by the aggregate.
///
/// The aggregate records into it; the hosting layer drains it after each
/// successful mutation (outbox style).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEventLog {
    events: Vec<DomainEvent>,
}

impl DomainEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event. Only the aggregate records.
    pub(crate) fn record(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    /// The buffered events, oldest first.
    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Take ownership of the buffered events, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discard the buffered events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
