//! Tests for the event service
//!
//! Exercises the full orchestration path against in-memory mocks: domain
//! operations, event draining and publishing, persistence, and the error
//! taxonomy surfaced to hosts.

use std::sync::Arc;

use chrono::Duration;
use community_events_application::services::{
    CreateEventCommand, EventService, RegisterAttendeeCommand,
};
use community_events_application::{ApplicationError, ServiceContext};
use community_events_common::config::EventLimits;
use community_events_common::datetime::now_utc;
use community_events_domain::event::EventStatus;
use community_events_domain::events::DomainEvent;
use community_events_domain::identifiers::{AttendeeId, EventId, OrganizerId};
use community_events_testing::{
    builders::EventBuilder,
    fixtures::create_standard_pricing,
    mocks::{FailingEventPublisher, InMemoryEventRepository, RecordingEventPublisher},
};
use rust_decimal::Decimal;

type TestService = EventService<InMemoryEventRepository, RecordingEventPublisher>;

fn service() -> (TestService, Arc<InMemoryEventRepository>, Arc<RecordingEventPublisher>) {
    let repository = Arc::new(InMemoryEventRepository::new());
    let publisher = Arc::new(RecordingEventPublisher::new());
    let service = EventService::new(
        Arc::clone(&repository),
        Arc::clone(&publisher),
        EventLimits::default(),
    );
    (service, repository, publisher)
}

fn ctx() -> ServiceContext {
    ServiceContext::new("corr-test")
}

fn create_command(capacity: u32) -> CreateEventCommand {
    let start = now_utc() + Duration::days(30);
    CreateEventCommand {
        title: "Harvest Festival".to_string(),
        description: "Annual community gathering".to_string(),
        start_date: start,
        end_date: start + Duration::hours(6),
        organizer_id: OrganizerId::new(),
        capacity,
    }
}

#[tokio::test]
async fn test_create_publish_register_flow() {
    let (service, repository, publisher) = service();
    let ctx = ctx();

    let created = service.create_event(&ctx, create_command(10)).await.unwrap();
    assert_eq!(created.status, EventStatus::Draft);
    assert_eq!(repository.event_count(), 1);

    let published = service.publish_event(&ctx, created.id).await.unwrap();
    assert_eq!(published.status, EventStatus::Published);

    let attendee = AttendeeId::new();
    let after_register = service
        .register_attendee(
            &ctx,
            created.id,
            RegisterAttendeeCommand {
                user_id: attendee,
                quantity: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(after_register.current_registrations, 2);
    assert_eq!(after_register.registrations.len(), 1);

    // One batch per mutation, drained in order.
    let batches = publisher.batches();
    assert_eq!(batches.len(), 2);
    assert!(matches!(batches[0][..], [DomainEvent::Published { .. }]));
    assert!(matches!(
        batches[1][..],
        [DomainEvent::RegistrationConfirmed { quantity: 2, .. }]
    ));

    // The persisted aggregate has an empty buffer.
    let fetched = service.get_event(&ctx, created.id).await.unwrap();
    assert_eq!(fetched.current_registrations, 2);
}

#[tokio::test]
async fn test_domain_conflicts_surface_verbatim() {
    let (service, repository, _publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().with_capacity(1).build();
    let id = event.id();
    repository.seed(event);

    // Draft event: registration is a state conflict.
    let err = service
        .register_attendee(
            &ctx,
            id,
            RegisterAttendeeCommand {
                user_id: AttendeeId::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
    assert_eq!(err.to_string(), "Cannot register for unpublished event");

    service.publish_event(&ctx, id).await.unwrap();
    service
        .register_attendee(
            &ctx,
            id,
            RegisterAttendeeCommand {
                user_id: AttendeeId::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap();

    let err = service
        .register_attendee(
            &ctx,
            id,
            RegisterAttendeeCommand {
                user_id: AttendeeId::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Event is at full capacity");
}

#[tokio::test]
async fn test_cancel_registration_frees_capacity() {
    let (service, repository, publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().with_capacity(2).published().build();
    let id = event.id();
    repository.seed(event);

    let (user_a, user_b, user_c) = (AttendeeId::new(), AttendeeId::new(), AttendeeId::new());
    for user in [user_a, user_b] {
        service
            .register_attendee(&ctx, id, RegisterAttendeeCommand { user_id: user, quantity: 1 })
            .await
            .unwrap();
    }

    let err = service
        .register_attendee(&ctx, id, RegisterAttendeeCommand { user_id: user_c, quantity: 1 })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Event is at full capacity");

    let after_cancel = service.cancel_registration(&ctx, id, user_a).await.unwrap();
    assert_eq!(after_cancel.current_registrations, 1);

    let after_refill = service
        .register_attendee(&ctx, id, RegisterAttendeeCommand { user_id: user_c, quantity: 1 })
        .await
        .unwrap();
    assert_eq!(after_refill.current_registrations, 2);

    let cancelled: Vec<_> = publisher
        .published_events()
        .into_iter()
        .filter(|e| matches!(e, DomainEvent::RegistrationCancelled { .. }))
        .collect();
    assert_eq!(cancelled.len(), 1);
}

#[tokio::test]
async fn test_unknown_event_is_not_found() {
    let (service, _repository, _publisher) = service();
    let ctx = ctx();

    let err = service.get_event(&ctx, EventId::new()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_command_validation_rejects_bad_input() {
    let (service, repository, _publisher) = service();
    let ctx = ctx();

    let mut command = create_command(10);
    command.title = String::new();
    let err = service.create_event(&ctx, command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::ValidationFailed(_)));
    assert_eq!(repository.event_count(), 0);

    let err = service
        .create_event(&ctx, create_command(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_configured_limits_are_enforced() {
    let repository = Arc::new(InMemoryEventRepository::new());
    let publisher = Arc::new(RecordingEventPublisher::new());
    let service = EventService::new(
        Arc::clone(&repository),
        Arc::clone(&publisher),
        EventLimits {
            max_capacity: 100,
            max_group_size: 4,
        },
    );
    let ctx = ctx();

    let err = service
        .create_event(&ctx, create_command(101))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::ValidationFailed(_)));

    let event = EventBuilder::new().with_capacity(50).published().build();
    let id = event.id();
    repository.seed(event);

    let err = service
        .register_attendee(
            &ctx,
            id,
            RegisterAttendeeCommand {
                user_id: AttendeeId::new(),
                quantity: 5,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_lifecycle_use_cases() {
    let (service, repository, publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().published().build();
    let id = event.id();
    repository.seed(event);

    let postponed = service
        .postpone_event(&ctx, id, "monsoon warning")
        .await
        .unwrap();
    assert_eq!(postponed.status, EventStatus::Postponed);
    assert_eq!(postponed.cancellation_reason.as_deref(), Some("monsoon warning"));

    // Terminal: cancelling a postponed event is a conflict.
    let err = service.cancel_event(&ctx, id, "x").await.unwrap_err();
    assert_eq!(err.to_string(), "Only published events can be cancelled");

    assert!(matches!(
        publisher.published_events()[..],
        [DomainEvent::Postponed { .. }]
    ));
}

#[tokio::test]
async fn test_submit_for_review_records_cultural_flag() {
    let (service, repository, publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().build();
    let id = event.id();
    repository.seed(event);

    let reviewed = service.submit_for_review(&ctx, id).await.unwrap();
    assert_eq!(reviewed.status, EventStatus::UnderReview);

    match &publisher.published_events()[..] {
        [DomainEvent::SubmittedForReview {
            requires_cultural_approval,
            ..
        }] => assert!(*requires_cultural_approval),
        other => panic!("expected SubmittedForReview, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_capacity_records_previous_and_new() {
    let (service, repository, publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().with_capacity(50).published().build();
    let id = event.id();
    repository.seed(event);

    let updated = service.update_capacity(&ctx, id, 75).await.unwrap();
    assert_eq!(updated.capacity, 75);

    match &publisher.published_events()[..] {
        [DomainEvent::CapacityUpdated {
            previous_capacity,
            new_capacity,
            ..
        }] => {
            assert_eq!(*previous_capacity, 50);
            assert_eq!(*new_capacity, 75);
        }
        other => panic!("expected CapacityUpdated, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scheduling_conflict_check() {
    let (service, repository, _publisher) = service();
    let ctx = ctx();

    let event = EventBuilder::new().build();
    let overlapping = EventBuilder::new().build();
    let disjoint = EventBuilder::new().starting_in_days(60).build();

    let (id, overlapping_id, disjoint_id) = (event.id(), overlapping.id(), disjoint.id());
    repository.seed(event);
    repository.seed(overlapping);
    repository.seed(disjoint);

    let conflict = service
        .check_scheduling_conflict(&ctx, id, overlapping_id)
        .await
        .unwrap()
        .expect("same-window events conflict");
    assert_eq!(conflict.event_id, id);
    assert_eq!(conflict.conflicting_event_id, overlapping_id);

    let no_conflict = service
        .check_scheduling_conflict(&ctx, id, disjoint_id)
        .await
        .unwrap();
    assert!(no_conflict.is_none());

    let err = service
        .check_scheduling_conflict(&ctx, id, EventId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn test_quote_price() {
    let (service, _repository, _publisher) = service();
    let ctx = ctx();

    let policy = create_standard_pricing();
    let total = service.quote_price(&ctx, &policy, 5).await.unwrap();
    assert_eq!(total.amount(), Decimal::from(500));

    let err = service.quote_price(&ctx, &policy, 0).await.unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Quantity must be greater than zero");
}

#[tokio::test]
async fn test_publisher_failure_keeps_old_state() {
    let repository = Arc::new(InMemoryEventRepository::new());
    let service = EventService::new(
        Arc::clone(&repository),
        Arc::new(FailingEventPublisher),
        EventLimits::default(),
    );
    let ctx = ctx();

    let event = EventBuilder::new().with_capacity(5).published().build();
    let id = event.id();
    repository.seed(event);

    let err = service
        .register_attendee(
            &ctx,
            id,
            RegisterAttendeeCommand {
                user_id: AttendeeId::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_retryable());

    // The mutation was not persisted.
    let fetched = service.get_event(&ctx, id).await.unwrap();
    assert_eq!(fetched.current_registrations, 0);
}
