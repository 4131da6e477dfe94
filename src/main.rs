use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinemood::{
    config::Config,
    db,
    routes::{create_router, AppState},
    services::SentimentClassifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinemood=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = db::load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load movie catalog from {}", config.catalog_path))?;

    let classifier = SentimentClassifier::default();
    tracing::info!(model = classifier.model_name(), "Sentiment model ready");

    let state = AppState::from_config(&config, catalog, classifier);
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
