//! The event aggregate root.
//!
//! An [`Event`] owns its registrations and is the consistency boundary for
//! the capacity invariant: the derived sum of active registration quantities
//! never exceeds `capacity`. Every successful mutation appends one domain
//! event to the aggregate's buffer and stamps `updated_at`.
//!
//! The core assumes single-writer, in-process mutation of one aggregate at a
//! time; cross-call mutual exclusion is the hosting layer's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::errors::{EventError, ScheduleError};
use crate::events::{DomainEvent, DomainEventLog};
use crate::identifiers::{AttendeeId, EventId, OrganizerId, RegistrationId};
use crate::registration::Registration;
use crate::schedule::{self, SchedulingConflict};

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    UnderReview,
    Published,
    Active,
    Postponed,
    Cancelled,
    Completed,
    Archived,
}

impl EventStatus {
    /// Whether the directed transition `self -> target` is on the allowed
    /// lifecycle graph.
    pub fn can_transition_to(&self, target: EventStatus) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::UnderReview)
                | (Self::Draft, Self::Published)
                | (Self::Published, Self::Active)
                | (Self::Published, Self::Postponed)
                | (Self::Published, Self::Cancelled)
                | (Self::Active, Self::Completed)
                | (Self::Completed, Self::Archived)
        )
    }

    /// Postponed, Cancelled and Archived admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Postponed | Self::Cancelled | Self::Archived)
    }

    /// Only published events admit registrations.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "Draft",
            Self::UnderReview => "UnderReview",
            Self::Published => "Published",
            Self::Active => "Active",
            Self::Postponed => "Postponed",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        };
        write!(f, "{name}")
    }
}

/// Non-empty event title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTitle(String);

impl EventTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, EventError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventTitle {
    type Error = EventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventTitle> for String {
    fn from(title: EventTitle) -> Self {
        title.0
    }
}

impl Display for EventTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty event description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDescription(String);

impl EventDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, EventError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EventError::EmptyDescription);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventDescription {
    type Error = EventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventDescription> for String {
    fn from(description: EventDescription) -> Self {
        description.0
    }
}

/// The aggregate root: lifecycle state machine, capacity ledger, and owned
/// registrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: EventTitle,
    description: EventDescription,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    organizer_id: OrganizerId,
    capacity: u32,
    status: EventStatus,
    cancellation_reason: Option<String>,
    updated_at: Option<DateTime<Utc>>,
    registrations: Vec<Registration>,
    domain_events: DomainEventLog,
}

impl Event {
    /// Create a draft event.
    ///
    /// Date ordering and the not-in-the-past rule are checked against the
    /// supplied clock reading; cultural-calendar appropriateness is the
    /// caller's concern, not this aggregate's.
    pub fn create(
        title: EventTitle,
        description: EventDescription,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        organizer_id: OrganizerId,
        capacity: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, EventError> {
        if end_date <= start_date {
            return Err(EventError::EndBeforeStart);
        }
        if start_date < now {
            return Err(EventError::StartInPast);
        }
        if capacity == 0 {
            return Err(EventError::NonPositiveCapacity);
        }

        Ok(Self {
            id: EventId::new(),
            title,
            description,
            start_date,
            end_date,
            organizer_id,
            capacity,
            status: EventStatus::Draft,
            cancellation_reason: None,
            updated_at: None,
            registrations: Vec::new(),
            domain_events: DomainEventLog::new(),
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &EventTitle {
        &self.title
    }

    pub fn description(&self) -> &EventDescription {
        &self.description
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn organizer_id(&self) -> OrganizerId {
        self.organizer_id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn cancellation_reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Derived capacity ledger: sum of quantities over active registrations.
    pub fn current_registrations(&self) -> u32 {
        self.registrations
            .iter()
            .filter(|r| r.is_active())
            .map(Registration::quantity)
            .sum()
    }

    /// Pure capacity predicate.
    pub fn has_capacity_for(&self, quantity: u32) -> bool {
        self.current_registrations().saturating_add(quantity) <= self.capacity
    }

    /// Buffered domain events, oldest first.
    pub fn domain_events(&self) -> &[DomainEvent] {
        self.domain_events.events()
    }

    /// Take the buffered domain events, leaving the buffer empty.
    pub fn drain_domain_events(&mut self) -> Vec<DomainEvent> {
        self.domain_events.drain()
    }

    /// Discard the buffered domain events.
    pub fn clear_domain_events(&mut self) {
        self.domain_events.clear();
    }

    /// Publish a draft event, opening it for registrations.
    pub fn publish(&mut self, now: DateTime<Utc>) -> Result<(), EventError> {
        match self.status {
            EventStatus::Draft => {}
            EventStatus::Published => return Err(EventError::AlreadyPublished),
            _ => return Err(EventError::NotDraft),
        }

        self.status = EventStatus::Published;
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::Published {
            event_id: self.id,
            published_by: self.organizer_id,
            published_at: now,
        });
        Ok(())
    }

    /// Hand a draft event to the review queue.
    pub fn submit_for_review(&mut self, now: DateTime<Utc>) -> Result<(), EventError> {
        if self.status != EventStatus::Draft {
            return Err(EventError::NotDraftForReview);
        }

        self.status = EventStatus::UnderReview;
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::SubmittedForReview {
            event_id: self.id,
            submitted_at: now,
            requires_cultural_approval: true,
        });
        Ok(())
    }

    /// Mark a published event as running. Only allowed once its start date
    /// has been reached.
    pub fn activate(&mut self, now: DateTime<Utc>) -> Result<(), EventError> {
        if self.status != EventStatus::Published {
            return Err(EventError::NotPublishedForActivation);
        }
        if now < self.start_date {
            return Err(EventError::ActivationBeforeStart);
        }

        self.status = EventStatus::Active;
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::Activated {
            event_id: self.id,
            activated_at: now,
        });
        Ok(())
    }

    /// Postpone a published event, keeping the reason on record.
    pub fn postpone(&mut self, reason: &str, now: DateTime<Utc>) -> Result<(), EventError> {
        if self.status != EventStatus::Published {
            return Err(EventError::NotPublishedForPostponement);
        }
        if reason.trim().is_empty() {
            return Err(EventError::EmptyPostponementReason);
        }

        self.status = EventStatus::Postponed;
        self.cancellation_reason = Some(reason.to_string());
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::Postponed {
            event_id: self.id,
            reason: reason.to_string(),
            postponed_at: now,
        });
        Ok(())
    }

    /// Cancel a published event. Existing registrations are retained
    /// unchanged for refund processing.
    pub fn cancel(&mut self, reason: &str, now: DateTime<Utc>) -> Result<(), EventError> {
        if self.status != EventStatus::Published {
            return Err(EventError::NotPublishedForCancellation);
        }

        self.status = EventStatus::Cancelled;
        self.cancellation_reason = Some(reason.to_string());
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::Cancelled {
            event_id: self.id,
            reason: reason.to_string(),
            cancelled_at: now,
        });
        Ok(())
    }

    /// Close out an active event once its end date has passed.
    ///
    /// A no-op guard rather than an error: returns whether the transition
    /// happened. No domain event is defined for completion.
    pub fn complete(&mut self, now: DateTime<Utc>) -> bool {
        if self.status != EventStatus::Active || now <= self.end_date {
            return false;
        }

        self.status = EventStatus::Completed;
        self.updated_at = Some(now);
        true
    }

    /// Archive a completed event. Terminal; the record is kept, never
    /// deleted.
    pub fn archive(&mut self, now: DateTime<Utc>) -> Result<(), EventError> {
        if self.status != EventStatus::Completed {
            return Err(EventError::NotCompletedForArchival);
        }

        self.status = EventStatus::Archived;
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::Archived {
            event_id: self.id,
            archived_at: now,
        });
        Ok(())
    }

    /// Change the capacity bound. Never below the currently admitted count.
    pub fn update_capacity(&mut self, new_capacity: u32, now: DateTime<Utc>) -> Result<(), EventError> {
        if new_capacity == 0 {
            return Err(EventError::NonPositiveCapacity);
        }
        if new_capacity < self.current_registrations() {
            return Err(EventError::CapacityBelowRegistrations);
        }

        let previous_capacity = self.capacity;
        self.capacity = new_capacity;
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::CapacityUpdated {
            event_id: self.id,
            previous_capacity,
            new_capacity,
            updated_at: now,
        });
        Ok(())
    }

    /// Admit an attendee. Group bookings are a single registration with
    /// `quantity > 1`.
    pub fn register(
        &mut self,
        user_id: AttendeeId,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<RegistrationId, EventError> {
        if !self.status.accepts_registrations() {
            return Err(EventError::NotPublishedForRegistration);
        }
        if self.active_registration(user_id).is_some() {
            return Err(EventError::DuplicateRegistration);
        }
        if !self.has_capacity_for(quantity) {
            return Err(EventError::FullCapacity);
        }

        let registration = Registration::new(self.id, user_id, quantity, now)?;
        let registration_id = registration.id();
        self.registrations.push(registration);
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::RegistrationConfirmed {
            event_id: self.id,
            attendee_id: user_id,
            quantity,
            registration_date: now,
        });
        Ok(registration_id)
    }

    /// Cancel a user's active registration, freeing its quantity. The record
    /// is retained for refund bookkeeping.
    pub fn cancel_registration(
        &mut self,
        user_id: AttendeeId,
        now: DateTime<Utc>,
    ) -> Result<(), EventError> {
        let registration = self
            .registrations
            .iter_mut()
            .find(|r| r.user_id() == user_id && r.is_active())
            .ok_or(EventError::NotRegistered)?;

        registration.cancel(now);
        self.updated_at = Some(now);
        self.domain_events.record(DomainEvent::RegistrationCancelled {
            event_id: self.id,
            attendee_id: user_id,
            cancelled_at: now,
        });
        Ok(())
    }

    /// Legacy conflict check, polarity preserved: a found conflict is the
    /// `Ok` outcome, absence of a conflict is the `Err` outcome carrying
    /// "No scheduling conflict", and a missing counterpart fails with
    /// "Cannot check conflict with null event".
    ///
    /// New code should call [`schedule::detect`] or
    /// [`schedule::windows_overlap`] instead of matching on this inversion.
    pub fn has_scheduling_conflict(
        &self,
        other: Option<&Event>,
    ) -> Result<SchedulingConflict, ScheduleError> {
        let other = other.ok_or(ScheduleError::MissingCounterpart)?;
        schedule::detect(self, other).ok_or(ScheduleError::NoConflict)
    }

    fn active_registration(&self, user_id: AttendeeId) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|r| r.user_id() == user_id && r.is_active())
    }
}
