use std::sync::Arc;

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use fulfillment::modules::fulfillment::adapters::outbound::store_in_memory::InMemoryFulfillmentStore;
use fulfillment::shared::core::clock::SystemClock;
use fulfillment::shared::infrastructure::config::AppConfig;
use fulfillment::shell::graphql::{self, ENDPOINT};
use fulfillment::shell::http;
use fulfillment::shell::seed::seed_from_file;
use fulfillment::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryFulfillmentStore::new());
    let state = AppState::new(store, Arc::new(SystemClock));

    if let Some(path) = &config.seed_file {
        let imported = seed_from_file(&state, path).await?;
        tracing::info!(imported, path = %path.display(), "seed orders loaded");
    }

    let schema = graphql::build_schema(state.clone());
    let app = http::router(state)
        .merge(graphql::router(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    tracing::info!("REST endpoint: http://{}/api", config.addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, ENDPOINT);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutting down");
}
