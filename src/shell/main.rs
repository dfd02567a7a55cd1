use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use calendar_events::shell::config::Settings;
use calendar_events::shell::graphql::GRAPHQL_PATH;
use calendar_events::shell::http::router;
use calendar_events::shell::state::{AppState, open_event_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("loading settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    fmt().with_env_filter(filter).init();

    let events = open_event_store(&settings.storage)?;
    let app = router(AppState::new(events), settings.frontend.path.as_deref());

    let addr = settings.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("REST endpoint: http://{}/api/events", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
