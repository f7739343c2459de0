use std::sync::Arc;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ids::EventId;
use crate::modules::sport_events::core::ports::EventStore;

pub struct GetEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> GetEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, event_id: EventId) -> Result<Event, ApplicationError> {
        self.event_store
            .find_by_id(event_id)
            .await?
            .ok_or(ApplicationError::NotFound(event_id))
    }
}
