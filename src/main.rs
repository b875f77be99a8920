//! picalc server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use picalc::api::{shutdown_signal, ApiServer, AppState};
use picalc::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;
    tracing::info!("Pi calculator started");

    if let Err(err) = run(config).await {
        tracing::error!(error = %format!("{err:#}"), "Server failed");
        return Err(err);
    }

    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let server = ApiServer::with_state(AppState::new(config.api.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    server
        .serve(listener, shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("picalc=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).try_init()?;
        }
    }

    Ok(())
}
