//! Mock implementations of the application ports.
//!
//! In-memory stand-ins for the repository and the domain-event publisher so
//! service behavior can be tested without infrastructure.

use async_trait::async_trait;
use community_events_application::{
    ApplicationError, DomainEventPublisher, EventRepositoryPort,
};
use community_events_domain::{event::Event, events::DomainEvent, identifiers::EventId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory event repository.
///
/// The `RwLock` serializes access, which is exactly the single-writer
/// guarantee the hosting layer owes the aggregate.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an existing aggregate.
    pub fn seed(&self, event: Event) {
        self.events.write().insert(event.id(), event);
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }
}

#[async_trait]
impl EventRepositoryPort for InMemoryEventRepository {
    async fn get(&self, id: EventId) -> Result<Option<Event>, ApplicationError> {
        Ok(self.events.read().get(&id).cloned())
    }

    async fn insert(&self, event: &Event) -> Result<(), ApplicationError> {
        self.events.write().insert(event.id(), event.clone());
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), ApplicationError> {
        self.events.write().insert(event.id(), event.clone());
        Ok(())
    }
}

/// Recording publisher that keeps every drained batch for assertions.
#[derive(Default)]
pub struct RecordingEventPublisher {
    batches: Arc<RwLock<Vec<Vec<DomainEvent>>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All published events, flattened, oldest first.
    pub fn published_events(&self) -> Vec<DomainEvent> {
        self.batches.read().iter().flatten().cloned().collect()
    }

    /// The batches exactly as they were drained.
    pub fn batches(&self) -> Vec<Vec<DomainEvent>> {
        self.batches.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.batches.read().iter().map(Vec::len).sum()
    }

    pub fn clear(&self) {
        self.batches.write().clear();
    }
}

#[async_trait]
impl DomainEventPublisher for RecordingEventPublisher {
    async fn publish_batch(&self, events: &[DomainEvent]) -> Result<(), ApplicationError> {
        self.batches.write().push(events.to_vec());
        Ok(())
    }
}

/// Publisher that fails every publish, for testing error propagation.
pub struct FailingEventPublisher;

#[async_trait]
impl DomainEventPublisher for FailingEventPublisher {
    async fn publish_batch(&self, _events: &[DomainEvent]) -> Result<(), ApplicationError> {
        Err(ApplicationError::ServiceUnavailable(
            "event publisher is down".to_string(),
        ))
    }
}
