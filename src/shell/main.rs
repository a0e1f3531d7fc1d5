use anyhow::Context;
use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use project_timesheets::modules::timesheets::adapters::outbound::in_memory_entity_store::InMemoryEntityStore;
use project_timesheets::shell::config::AppConfig;
use project_timesheets::shell::http::router;
use project_timesheets::shell::seed::Seed;
use project_timesheets::shell::state::AppState;

const DEFAULT_FILTER: &str = "project_timesheets=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryEntityStore::new());
    if let Some(path) = &config.seed_path {
        Seed::from_path(path)
            .with_context(|| format!("loading seed {}", path.display()))?
            .load_into(&*store)
            .await?;
    }

    let mut app = router(AppState::new(store)).layer(TraceLayer::new_for_http());
    if !config.cors_origins.is_empty() {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()
            .context("CORS_ORIGINS must contain valid origins")?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
