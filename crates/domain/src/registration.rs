//! Attendee registrations and their status state machine.
//!
//! A [`Registration`] is owned by exactly one event. Group bookings are a
//! single registration with `quantity > 1`; there is no per-seat entity.
//! Registrations are never deleted; cancellation is a status, kept for
//! refund bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::errors::RegistrationError;
use crate::identifiers::{AttendeeId, EventId, RegistrationId};

/// Registration lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
    Waitlisted,
    Refunded,
}

impl RegistrationStatus {
    /// Whether the directed transition `self -> target` is on the allowed
    /// graph. This is the single authority consulted by
    /// [`Registration::move_to`]; cancellation is the one path that bypasses
    /// it (idempotent, allowed from anywhere).
    pub fn can_transition_to(&self, target: RegistrationStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::CheckedIn)
                | (Self::CheckedIn, Self::Completed)
                | (Self::Cancelled, Self::Refunded)
        )
    }

    /// Active registrations count against event capacity.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "CheckedIn",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Waitlisted => "Waitlisted",
            Self::Refunded => "Refunded",
        };
        write!(f, "{name}")
    }
}

/// A per-attendee registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    id: RegistrationId,
    event_id: EventId,
    user_id: AttendeeId,
    quantity: u32,
    status: RegistrationStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Registration {
    /// Create a confirmed registration.
    ///
    /// Admission decisions (published event, capacity, uniqueness) belong to
    /// the owning event; this constructor only enforces the entity's own
    /// invariant.
    pub fn new(
        event_id: EventId,
        user_id: AttendeeId,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, RegistrationError> {
        if quantity == 0 {
            return Err(RegistrationError::NonPositiveQuantity);
        }

        Ok(Self {
            id: RegistrationId::new(),
            event_id,
            user_id,
            quantity,
            status: RegistrationStatus::Confirmed,
            created_at: now,
            updated_at: None,
        })
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn user_id(&self) -> AttendeeId {
        self.user_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Whether this registration currently occupies capacity.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Move to `target` along the allowed transition graph.
    pub fn move_to(
        &mut self,
        target: RegistrationStatus,
        now: DateTime<Utc>,
    ) -> Result<(), RegistrationError> {
        if !self.status.can_transition_to(target) {
            return Err(RegistrationError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }

        self.status = target;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Confirm a pending registration.
    ///
    /// Delegates to [`Self::move_to`], so resurrecting a cancelled
    /// registration fails like any other disallowed transition.
    pub fn confirm(&mut self, now: DateTime<Utc>) -> Result<(), RegistrationError> {
        self.move_to(RegistrationStatus::Confirmed, now)
    }

    /// Check the attendee in at the venue.
    pub fn check_in(&mut self, now: DateTime<Utc>) -> Result<(), RegistrationError> {
        if self.status != RegistrationStatus::Confirmed {
            return Err(RegistrationError::NotConfirmed);
        }

        self.status = RegistrationStatus::CheckedIn;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Mark attendance complete after check-in.
    pub fn complete_attendance(&mut self, now: DateTime<Utc>) -> Result<(), RegistrationError> {
        if self.status != RegistrationStatus::CheckedIn {
            return Err(RegistrationError::NotCheckedIn);
        }

        self.status = RegistrationStatus::Completed;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Cancel this registration. Idempotent: cancelling an already-cancelled
    /// registration is a no-op, not an error. The record is retained for
    /// refund bookkeeping.
    pub fn cancel(&mut self, now: DateTime<Utc>) {
        if self.status == RegistrationStatus::Cancelled {
            return;
        }

        self.status = RegistrationStatus::Cancelled;
        self.updated_at = Some(now);
    }
}
