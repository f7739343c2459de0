use uuid::Uuid;

pub type EventId = Uuid;

/// Produces the identifier for a new event. Handlers take one of these so
/// tests can pin ids.
pub type EventIdFactory = fn() -> EventId;

pub fn new_event_id() -> EventId {
    Uuid::now_v7()
}
