//! Event Service
//!
//! Use-case orchestration for the event aggregate: every mutation loads the
//! aggregate through the repository port, invokes the domain operation,
//! drains the recorded domain events, hands them to the publisher, and
//! persists the new state. All mutations of a given event are expected to be
//! funneled through one service instance over a serializing repository;
//! the aggregate itself provides no cross-call mutual exclusion.

use super::{map_domain_error, DomainEventPublisher, ServiceContext};
use crate::dto::EventDto;
use crate::validation::ValidatorExt;
use crate::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use community_events_common::config::EventLimits;
use community_events_common::datetime::now_utc;
use community_events_domain::errors::DomainError;
use community_events_domain::event::{Event, EventDescription, EventTitle};
use community_events_domain::identifiers::{AttendeeId, EventId, OrganizerId};
use community_events_domain::money::Money;
use community_events_domain::pricing::PricingPolicy;
use community_events_domain::schedule::{self, SchedulingConflict};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

/// Event repository trait (to be implemented by infrastructure)
///
/// Implementations are the serialization point for concurrent access: the
/// capacity check-and-admit must be atomic per aggregate, so a production
/// implementation funnels writes through a single owner, an optimistic
/// version check, or a lock.
#[async_trait]
pub trait EventRepositoryPort: Send + Sync {
    async fn get(&self, id: EventId) -> Result<Option<Event>, ApplicationError>;
    async fn insert(&self, event: &Event) -> Result<(), ApplicationError>;
    async fn update(&self, event: &Event) -> Result<(), ApplicationError>;
}

/// Command for creating an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventCommand {
    #[validate(length(min = 1, message = "Event title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Event description is required"))]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: OrganizerId,
    #[validate(range(min = 1, message = "Capacity must be greater than 0"))]
    pub capacity: u32,
}

/// Command for registering an attendee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAttendeeCommand {
    pub user_id: AttendeeId,
    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: u32,
}

/// Event service implementation
pub struct EventService<R, P>
where
    R: EventRepositoryPort,
    P: DomainEventPublisher,
{
    repository: Arc<R>,
    event_publisher: Arc<P>,
    limits: EventLimits,
}

impl<R, P> EventService<R, P>
where
    R: EventRepositoryPort,
    P: DomainEventPublisher,
{
    pub fn new(repository: Arc<R>, event_publisher: Arc<P>, limits: EventLimits) -> Self {
        Self {
            repository,
            event_publisher,
            limits,
        }
    }

    /// Create a new draft event
    #[instrument(skip(self, ctx, command), fields(correlation_id = %ctx.correlation_id))]
    pub async fn create_event(
        &self,
        ctx: &ServiceContext,
        command: CreateEventCommand,
    ) -> ApplicationResult<EventDto> {
        command.to_validation_result().ensure_valid()?;

        if command.capacity > self.limits.max_capacity {
            return Err(ApplicationError::ValidationFailed(format!(
                "capacity: Capacity exceeds the configured maximum of {}",
                self.limits.max_capacity
            )));
        }

        let title = EventTitle::new(command.title).map_err(into_app_error)?;
        let description =
            EventDescription::new(command.description).map_err(into_app_error)?;

        let event = Event::create(
            title,
            description,
            command.start_date,
            command.end_date,
            command.organizer_id,
            command.capacity,
            now_utc(),
        )
        .map_err(into_app_error)?;

        self.repository.insert(&event).await?;

        info!(event_id = %event.id(), "Event created");

        Ok(EventDto::from(&event))
    }

    /// Get an event by ID
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn get_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
    ) -> ApplicationResult<EventDto> {
        debug!(event_id = %id, "Fetching event");
        let event = self.load(id).await?;
        Ok(EventDto::from(&event))
    }

    /// Publish a draft event, opening it for registrations
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn publish_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
    ) -> ApplicationResult<EventDto> {
        let dto = self.apply(id, |event| event.publish(now_utc()).map_err(DomainError::from))
            .await?;
        info!(event_id = %id, "Event published");
        Ok(dto)
    }

    /// Submit a draft event for cultural review
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn submit_for_review(
        &self,
        ctx: &ServiceContext,
        id: EventId,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| {
                event.submit_for_review(now_utc()).map_err(DomainError::from)
            })
            .await?;
        info!(event_id = %id, "Event submitted for review");
        Ok(dto)
    }

    /// Activate a published event once its start date has been reached
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn activate_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| event.activate(now_utc()).map_err(DomainError::from))
            .await?;
        info!(event_id = %id, "Event activated");
        Ok(dto)
    }

    /// Postpone a published event
    #[instrument(skip(self, ctx, reason), fields(correlation_id = %ctx.correlation_id))]
    pub async fn postpone_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        reason: &str,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| {
                event.postpone(reason, now_utc()).map_err(DomainError::from)
            })
            .await?;
        info!(event_id = %id, "Event postponed");
        Ok(dto)
    }

    /// Cancel a published event, retaining registrations for refunds
    #[instrument(skip(self, ctx, reason), fields(correlation_id = %ctx.correlation_id))]
    pub async fn cancel_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        reason: &str,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| {
                event.cancel(reason, now_utc()).map_err(DomainError::from)
            })
            .await?;
        info!(event_id = %id, "Event cancelled");
        Ok(dto)
    }

    /// Archive a completed event
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn archive_event(
        &self,
        ctx: &ServiceContext,
        id: EventId,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| event.archive(now_utc()).map_err(DomainError::from))
            .await?;
        info!(event_id = %id, "Event archived");
        Ok(dto)
    }

    /// Change an event's capacity bound
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn update_capacity(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        new_capacity: u32,
    ) -> ApplicationResult<EventDto> {
        if new_capacity > self.limits.max_capacity {
            return Err(ApplicationError::ValidationFailed(format!(
                "capacity: Capacity exceeds the configured maximum of {}",
                self.limits.max_capacity
            )));
        }

        let dto = self
            .apply(id, |event| {
                event
                    .update_capacity(new_capacity, now_utc())
                    .map_err(DomainError::from)
            })
            .await?;
        info!(event_id = %id, new_capacity, "Event capacity updated");
        Ok(dto)
    }

    /// Register an attendee for a published event
    #[instrument(skip(self, ctx, command), fields(correlation_id = %ctx.correlation_id))]
    pub async fn register_attendee(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        command: RegisterAttendeeCommand,
    ) -> ApplicationResult<EventDto> {
        command.to_validation_result().ensure_valid()?;

        if command.quantity > self.limits.max_group_size {
            return Err(ApplicationError::ValidationFailed(format!(
                "quantity: Quantity exceeds the maximum group size of {}",
                self.limits.max_group_size
            )));
        }

        let dto = self
            .apply(id, |event| {
                event
                    .register(command.user_id, command.quantity, now_utc())
                    .map(|_| ())
                    .map_err(DomainError::from)
            })
            .await?;
        info!(
            event_id = %id,
            attendee_id = %command.user_id,
            quantity = command.quantity,
            "Attendee registered"
        );
        Ok(dto)
    }

    /// Cancel an attendee's registration, freeing their quantity
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn cancel_registration(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        user_id: AttendeeId,
    ) -> ApplicationResult<EventDto> {
        let dto = self
            .apply(id, |event| {
                event
                    .cancel_registration(user_id, now_utc())
                    .map_err(DomainError::from)
            })
            .await?;
        info!(event_id = %id, attendee_id = %user_id, "Registration cancelled");
        Ok(dto)
    }

    /// Check two events' schedules for a same-day overlap.
    ///
    /// Exposes the straightforward shape: `Some` when the windows conflict,
    /// `None` when they do not.
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn check_scheduling_conflict(
        &self,
        ctx: &ServiceContext,
        id: EventId,
        other_id: EventId,
    ) -> ApplicationResult<Option<SchedulingConflict>> {
        let event = self.load(id).await?;
        let other = self.load(other_id).await?;
        Ok(schedule::detect(&event, &other))
    }

    /// Quote a total price for a quantity under the given pricing policy,
    /// as of the current clock reading
    #[instrument(skip(self, ctx, policy), fields(correlation_id = %ctx.correlation_id))]
    pub async fn quote_price(
        &self,
        ctx: &ServiceContext,
        policy: &PricingPolicy,
        quantity: u32,
    ) -> ApplicationResult<Money> {
        policy
            .calculate_price(quantity, now_utc())
            .map_err(|e| map_domain_error(e.into()))
    }

    async fn load(&self, id: EventId) -> ApplicationResult<Event> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Event not found: {}", id)))
    }

    /// Run one domain mutation against the aggregate, then drain the
    /// recorded events, publish them, and persist the new state. Draining
    /// happens on this call path, before any other reader can observe the
    /// buffer.
    async fn apply<F>(&self, id: EventId, op: F) -> ApplicationResult<EventDto>
    where
        F: FnOnce(&mut Event) -> Result<(), DomainError>,
    {
        let mut event = self.load(id).await?;

        op(&mut event).map_err(map_domain_error)?;

        let pending = event.drain_domain_events();
        if !pending.is_empty() {
            self.event_publisher.publish_batch(&pending).await?;
        }

        self.repository.update(&event).await?;

        Ok(EventDto::from(&event))
    }
}

fn into_app_error(error: community_events_domain::errors::EventError) -> ApplicationError {
    map_domain_error(error.into())
}
