//! Data transfer objects handed to host layers.

use chrono::{DateTime, Utc};
use community_events_domain::{
    event::{Event, EventStatus},
    identifiers::{AttendeeId, EventId, OrganizerId, RegistrationId},
    registration::{Registration, RegistrationStatus},
};
use serde::{Deserialize, Serialize};

/// Read model of the event aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: OrganizerId,
    pub capacity: u32,
    pub current_registrations: u32,
    pub status: EventStatus,
    pub cancellation_reason: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub registrations: Vec<RegistrationDto>,
}

/// Read model of a registration record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationDto {
    pub id: RegistrationId,
    pub user_id: AttendeeId,
    pub quantity: u32,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id(),
            title: event.title().as_str().to_string(),
            description: event.description().as_str().to_string(),
            start_date: event.start_date(),
            end_date: event.end_date(),
            organizer_id: event.organizer_id(),
            capacity: event.capacity(),
            current_registrations: event.current_registrations(),
            status: event.status(),
            cancellation_reason: event.cancellation_reason().map(str::to_string),
            updated_at: event.updated_at(),
            registrations: event.registrations().iter().map(RegistrationDto::from).collect(),
        }
    }
}

impl From<&Registration> for RegistrationDto {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id(),
            user_id: registration.user_id(),
            quantity: registration.quantity(),
            status: registration.status(),
            created_at: registration.created_at(),
        }
    }
}
