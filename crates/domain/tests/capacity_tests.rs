//! Tests for capacity-gated registration
//!
//! Scenario walkthroughs plus a property: no sequence of register and
//! cancel calls can push the admitted quantity past the capacity bound.

use chrono::{DateTime, Duration, TimeZone, Utc};
use community_events_domain::{
    event::{Event, EventDescription, EventTitle},
    events::DomainEvent,
    identifiers::{AttendeeId, OrganizerId},
    registration::RegistrationStatus,
};
use proptest::prelude::*;

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

fn published_event(capacity: u32) -> Event {
    let now = clock();
    let mut event = Event::create(
        EventTitle::new("Drum Circle").unwrap(),
        EventDescription::new("Weekly drop-in session").unwrap(),
        now + Duration::days(7),
        now + Duration::days(7) + Duration::hours(2),
        OrganizerId::new(),
        capacity,
        now,
    )
    .unwrap();
    event.publish(now).unwrap();
    event.clear_domain_events();
    event
}

#[test]
fn test_register_requires_published_event() {
    let now = clock();
    let mut event = Event::create(
        EventTitle::new("Drum Circle").unwrap(),
        EventDescription::new("Weekly drop-in session").unwrap(),
        now + Duration::days(7),
        now + Duration::days(7) + Duration::hours(2),
        OrganizerId::new(),
        10,
        now,
    )
    .unwrap();

    let err = event.register(AttendeeId::new(), 1, now).unwrap_err();
    assert_eq!(err.to_string(), "Cannot register for unpublished event");
}

#[test]
fn test_duplicate_registration_rejected() {
    let now = clock();
    let mut event = published_event(10);
    let attendee = AttendeeId::new();

    event.register(attendee, 2, now).unwrap();
    let err = event.register(attendee, 1, now).unwrap_err();
    assert_eq!(err.to_string(), "User is already registered for this event");
    assert_eq!(event.current_registrations(), 2);

    // After cancelling, the same user may register again.
    event.cancel_registration(attendee, now).unwrap();
    event.register(attendee, 1, now).unwrap();
    assert_eq!(event.current_registrations(), 1);
}

#[test]
fn test_fill_free_refill_scenario() {
    let now = clock();
    let mut event = published_event(2);
    let (user_a, user_b, user_c) = (AttendeeId::new(), AttendeeId::new(), AttendeeId::new());

    event.register(user_a, 1, now).unwrap();
    event.register(user_b, 1, now).unwrap();
    assert_eq!(event.current_registrations(), 2);

    let err = event.register(user_c, 1, now).unwrap_err();
    assert_eq!(err.to_string(), "Event is at full capacity");
    assert_eq!(event.current_registrations(), 2);

    event.cancel_registration(user_a, now).unwrap();
    assert_eq!(event.current_registrations(), 1);

    event.register(user_c, 1, now).unwrap();
    assert_eq!(event.current_registrations(), 2);
}

#[test]
fn test_group_registration_counts_full_quantity() {
    let now = clock();
    let mut event = published_event(10);

    event.register(AttendeeId::new(), 6, now).unwrap();
    assert_eq!(event.current_registrations(), 6);
    assert!(event.has_capacity_for(4));
    assert!(!event.has_capacity_for(5));

    let err = event.register(AttendeeId::new(), 5, now).unwrap_err();
    assert_eq!(err.to_string(), "Event is at full capacity");
}

#[test]
fn test_cancel_registration_requires_active_record() {
    let now = clock();
    let mut event = published_event(10);
    let attendee = AttendeeId::new();

    let err = event.cancel_registration(attendee, now).unwrap_err();
    assert_eq!(err.to_string(), "User is not registered for this event");

    event.register(attendee, 1, now).unwrap();
    event.cancel_registration(attendee, now).unwrap();

    // The record is retained, cancelled, not deleted.
    assert_eq!(event.registrations().len(), 1);
    assert_eq!(
        event.registrations()[0].status(),
        RegistrationStatus::Cancelled
    );

    let err = event.cancel_registration(attendee, now).unwrap_err();
    assert_eq!(err.to_string(), "User is not registered for this event");
}

#[test]
fn test_registration_events_recorded() {
    let now = clock();
    let mut event = published_event(10);
    let attendee = AttendeeId::new();

    event.register(attendee, 3, now).unwrap();
    event.cancel_registration(attendee, now).unwrap();

    match event.domain_events() {
        [DomainEvent::RegistrationConfirmed {
            attendee_id,
            quantity,
            ..
        }, DomainEvent::RegistrationCancelled {
            attendee_id: cancelled_id,
            ..
        }] => {
            assert_eq!(*attendee_id, attendee);
            assert_eq!(*quantity, 3);
            assert_eq!(*cancelled_id, attendee);
        }
        other => panic!("unexpected event sequence: {other:?}"),
    }
}

// ============================================================================
// Property: the capacity invariant holds under any call sequence
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Register { user: usize, quantity: u32 },
    Cancel { user: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..8usize, 1..4u32).prop_map(|(user, quantity)| Op::Register { user, quantity }),
        (0..8usize).prop_map(|user| Op::Cancel { user }),
    ]
}

proptest! {
    #[test]
    fn prop_current_registrations_never_exceed_capacity(
        ops in proptest::collection::vec(op_strategy(), 1..60)
    ) {
        let now = clock();
        let capacity = 5;
        let mut event = published_event(capacity);
        let users: Vec<AttendeeId> = (0..8).map(|_| AttendeeId::new()).collect();

        for op in ops {
            let before = event.current_registrations();
            match op {
                Op::Register { user, quantity } => {
                    match event.register(users[user], quantity, now) {
                        Ok(_) => {}
                        Err(err) => {
                            // A rejected admission leaves the ledger unchanged.
                            prop_assert_eq!(event.current_registrations(), before, "{}", err);
                        }
                    }
                }
                Op::Cancel { user } => {
                    let _ = event.cancel_registration(users[user], now);
                }
            }
            prop_assert!(event.current_registrations() <= capacity);
        }
    }
}
