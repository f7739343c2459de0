use thiserror::Error;

use crate::modules::sport_events::core::ids::EventId;
use crate::modules::sport_events::core::ports::EventStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("event {0} not found")]
    NotFound(EventId),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}
