//! Community Events Domain Types
//!
//! This crate provides the core domain model for the community events
//! platform: the event lifecycle, registration admission under a hard
//! capacity bound, ticket pricing policies, and the domain events recorded
//! for downstream consumers (notifications, audit, an outbox writer).
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed UUID-based identifiers for all entities
//! - **money**: Immutable amount-plus-currency value object
//! - **pricing**: Standard, early-bird, and group-discount pricing policies
//! - **event**: The event aggregate root and its lifecycle state machine
//! - **registration**: Attendee registrations and their status state machine
//! - **schedule**: Scheduling conflict detection between two events
//! - **events**: Domain events buffered on the aggregate until drained
//! - **errors**: Error types whose `Display` renderings are the messages
//!   surfaced to callers
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use community_events_domain::{
//!     event::{Event, EventDescription, EventTitle},
//!     identifiers::{AttendeeId, OrganizerId},
//! };
//!
//! let now = Utc::now();
//! let mut event = Event::create(
//!     EventTitle::new("Lantern Parade").unwrap(),
//!     EventDescription::new("Evening procession through the old town").unwrap(),
//!     now + Duration::days(30),
//!     now + Duration::days(30) + Duration::hours(4),
//!     OrganizerId::new(),
//!     100,
//!     now,
//! )
//! .unwrap();
//!
//! event.publish(now).unwrap();
//! event.register(AttendeeId::new(), 2, now).unwrap();
//! assert_eq!(event.current_registrations(), 2);
//!
//! // Consumers read the recorded changes, then drain the buffer.
//! let pending = event.drain_domain_events();
//! assert_eq!(pending.len(), 2);
//! ```
//!
//! The aggregate assumes single-writer, in-process mutation; serializing
//! concurrent access to one event is the hosting layer's responsibility.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core domain modules
pub mod identifiers;
pub mod money;
pub mod pricing;
pub mod event;
pub mod registration;
pub mod schedule;
pub mod events;
pub mod errors;

// Re-export commonly used types
pub use identifiers::*;
pub use errors::{DomainError, DomainResult};

// Re-export key domain types
pub use event::{Event, EventDescription, EventStatus, EventTitle};
pub use events::{DomainEvent, DomainEventLog};
pub use money::{Currency, Money};
pub use pricing::PricingPolicy;
pub use registration::{Registration, RegistrationStatus};
pub use schedule::SchedulingConflict;
