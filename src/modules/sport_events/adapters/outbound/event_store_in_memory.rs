// In memory implementation of the EventStore port.
//
// Used by the binary for now and by every handler test. Records live in a
// single Vec behind an RwLock, so one save replaces a whole record and readers
// never see a half-written event.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ids::EventId;
use crate::modules::sport_events::core::ports::{EventStore, EventStoreError};

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    offline: bool,
    delay_save_ms: AtomicU64,
    saves: AtomicUsize,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_save_ms(&self, delay_ms: u64) {
        self.delay_save_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn find_all(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.clone())
    }

    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.events.read().await;
        Ok(guard.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn save(&self, event: Event) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.events.write().await;
        match guard.iter_mut().find(|e| e.event_id == event.event_id) {
            Some(existing) => *existing = event.clone(),
            None => guard.push(event.clone()),
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(event)
    }
}
