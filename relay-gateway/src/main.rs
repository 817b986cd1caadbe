//! Relay Gateway
//!
//! Authenticates callers with static bearer tokens, forwards their prompts to
//! an asynchronous prediction API, and keeps a per-user prompt history.

mod api;
mod config;
mod repository;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use relay_client::PredictionClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::repository::history_repository::HistoryFile;
use crate::service::{Authenticator, HistoryService, UpstreamPredictor};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "relay_gateway=debug,relay_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Relay Gateway...");

    // Missing REPLICATE_API_KEY exits here
    let config = Config::parse();
    config.validate()?;

    let credentials = config.load_credentials()?;
    let auth = Authenticator::new(credentials);
    info!("Loaded {} user credential(s)", auth.user_count());

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let client = PredictionClient::with_client(
        config.api_url.as_str(),
        config.api_key.as_str(),
        config.model.as_str(),
        http_client,
    )
    .with_poll_interval(config.poll_interval());

    info!(
        "Prediction API: {} (model {}, timeout {:?})",
        client.api_url(),
        client.model(),
        config.prompt_timeout()
    );

    let history_file = HistoryFile::new(&config.history_file);
    info!("History file: {}", history_file.path().display());
    let history = HistoryService::new(history_file);

    let state = AppState::new(
        auth,
        history,
        UpstreamPredictor::new(client, config.prompt_timeout()),
    );

    // Build router with all API endpoints
    let app = api::create_router(state);

    info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Relay Gateway stopped");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
