pub mod api;
pub mod config;
pub mod models;
pub mod reasoning; // external care-level assessment + fallback
pub mod session; // follow-up sessions awaiting answers
pub mod triage; // validation → emergency → vague → defer

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Reasoning client error: {0}")]
    Reasoning(#[from] reasoning::ReasoningError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Signal handler error: {0}")]
    Signal(#[from] std::io::Error),
}

/// Start the service and block until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let service_config = config::ServiceConfig::from_env()?;
    if service_config.api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY not set, reasoning requests will be unauthenticated");
    }

    let client = reasoning::HttpReasoningClient::new(&service_config)?;
    let ctx = api::ApiContext::new(Arc::new(client), &service_config);

    let mut server = api::start_server(ctx, service_config.bind_addr)
        .await
        .map_err(StartupError::Server)?;
    tracing::info!(addr = %server.addr, model = %service_config.model, "Ready");

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    server.stopped().await;
    Ok(())
}
