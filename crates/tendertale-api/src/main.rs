//! Tendertale API server entry point.

use std::error::Error;
use std::sync::Arc;

use tendertale_api::app::build_app;
use tendertale_api::chat_bot;
use tendertale_api::config::Config;
use tendertale_api::cors::OriginPolicy;
use tendertale_api::state::AppState;
use tendertale_content::FsSceneRepository;
use tendertale_progress::FsProgressRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Tendertale API server");

    let config = Config::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let app_state = AppState::new(
        Arc::new(FsSceneRepository::new(&config.scenes_dir)),
        Arc::new(FsProgressRepository::new(&config.saves_dir)),
    );

    // The bot runs for the lifetime of the process; its handle is not joined.
    let _bot = chat_bot::spawn(&config);

    let app = build_app(app_state, OriginPolicy::from_config(&config));

    let addr = config.listen_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
