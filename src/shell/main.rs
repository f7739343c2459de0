use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sport_events::modules::sport_events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use sport_events::shell::config::AppConfig;
use sport_events::shell::http::router;
use sport_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // In-memory store for now
    let event_store = Arc::new(InMemoryEventStore::new());
    let app = router(AppState::new(event_store));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Sport events API: http://{}/event", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
