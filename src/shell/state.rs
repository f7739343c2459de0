use std::sync::Arc;

use crate::modules::sport_events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::sport_events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::sport_events::use_cases::get_event::handler::GetEventHandler;
use crate::modules::sport_events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::sport_events::use_cases::update_score::handler::UpdateScoreHandler;

#[derive(Clone)]
pub struct AppState {
    pub create_event_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub get_event_handler: Arc<GetEventHandler<InMemoryEventStore>>,
    pub list_events_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub update_score_handler: Arc<UpdateScoreHandler<InMemoryEventStore>>,
    pub event_store: Arc<InMemoryEventStore>,
}

impl AppState {
    /// Wires every use case handler to the same store.
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            create_event_handler: Arc::new(CreateEventHandler::new(event_store.clone())),
            get_event_handler: Arc::new(GetEventHandler::new(event_store.clone())),
            list_events_handler: Arc::new(ListEventsHandler::new(event_store.clone())),
            update_score_handler: Arc::new(UpdateScoreHandler::new(event_store.clone())),
            event_store,
        }
    }
}
