use std::sync::Arc;

use playmood_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::{OpenAiCompletionProvider, RawgCatalog},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("playmood_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    config.warn_missing_credentials();

    // Initialize application state
    let catalog = RawgCatalog::new(config.api_key.clone(), config.rawg_api_url.clone());
    let completion =
        OpenAiCompletionProvider::new(config.openai_api_key.clone(), config.openai_api_url.clone());
    let state = AppState::new(Arc::new(catalog), Arc::new(completion));

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
