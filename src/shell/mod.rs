// Composition root for the sport_events bounded context.
//
// - Read config from the environment.
// - Instantiate the event store and wire it into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
