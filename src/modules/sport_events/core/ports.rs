// Ports define what the sport events core needs from the outside world.
//
// The event store is a plain record store: find everything, find one by id,
// save (insert or replace by id). It never assigns ids; callers do that with
// an explicit factory before the first save.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ids::EventId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All stored events in insertion order.
    async fn find_all(&self) -> Result<Vec<Event>, EventStoreError>;

    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, EventStoreError>;

    /// Stores the whole record atomically, replacing any record with the same id.
    async fn save(&self, event: Event) -> Result<Event, EventStoreError>;
}
