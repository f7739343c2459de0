use std::sync::Arc;

use crate::modules::sport_events::application::errors::ApplicationError;
use crate::modules::sport_events::core::event::Event;
use crate::modules::sport_events::core::ids::{EventId, EventIdFactory, new_event_id};
use crate::modules::sport_events::core::ports::EventStore;
use crate::modules::sport_events::use_cases::create_event::command::CreateEvent;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    id_factory: EventIdFactory,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self::with_id_factory(event_store, new_event_id)
    }

    pub fn with_id_factory(event_store: Arc<TEventStore>, id_factory: EventIdFactory) -> Self {
        Self {
            event_store,
            id_factory,
        }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<EventId, ApplicationError> {
        let event = Event::new(
            (self.id_factory)(),
            command.match_title,
            command.home_team_name,
            command.away_team_name,
        );
        let saved = self.event_store.save(event).await?;
        tracing::info!(event_id = %saved.event_id, match_title = %saved.match_title, "event created");
        Ok(saved.event_id)
    }
}
