use std::sync::Arc;

use anyhow::Context;
use gateway::classifier::ProcessClassifier;
use gateway::config::AppConfig;
use gateway::state::AppState;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let classifier = ProcessClassifier::from_config(&config.classifier);
    info!(
        program = %classifier.program(),
        args = ?classifier.args(),
        timeout_secs = ?config.classifier.timeout_secs,
        max_concurrent = ?config.classifier.max_concurrent,
        "Classifier configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        classifier: Arc::new(classifier),
        config,
    };
    let app = gateway::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Gateway running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
