use std::sync::Arc;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ports::EventStore;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self) -> Result<Vec<Event>, ApplicationError> {
        Ok(self.event_store.find_all().await?)
    }
}
