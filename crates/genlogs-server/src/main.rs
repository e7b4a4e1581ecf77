mod configuration;
mod error;
mod routes;
mod state;

use configuration::Settings;
use genlogs::{SERVICE_DESCRIPTION, SERVICE_TITLE, SERVICE_VERSION};
use state::AppState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    let addr = settings.server.socket_addr()?;

    let app = routes::configure(AppState::default());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} v{}: {}", SERVICE_TITLE, SERVICE_VERSION, SERVICE_DESCRIPTION);
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("shutting down");
}
