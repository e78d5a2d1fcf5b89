//! Review Bot server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use review_bot::adapters::http::{app_router, DialogueAppState};
use review_bot::adapters::presenter::TextPresenter;
use review_bot::adapters::session::InMemorySessionStore;
use review_bot::adapters::storage::JsonSubmissionStore;
use review_bot::application::HandleDialogueEventHandler;
use review_bot::config::{AppConfig, ConfigError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        environment = ?config.server.environment,
        data_file = %config.storage.data_file.display(),
        "Starting review bot"
    );

    let submissions = Arc::new(JsonSubmissionStore::init(&config.storage.data_file).await?);
    let sessions = Arc::new(InMemorySessionStore::new());
    let handler = Arc::new(HandleDialogueEventHandler::new(sessions, submissions));

    let state = DialogueAppState::new(handler, TextPresenter::new());
    let app = app_router(state, config.server.request_timeout());

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!(address = %config.server.bind_address(), "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
