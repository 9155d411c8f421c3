mod config;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let env_file_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        tracing::info!("loaded .env file");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?.leptos_options;
    tracing::info!(
        output = %leptos_options.output_name,
        assets = %config.assets_dir.display(),
        "leptos configuration loaded"
    );

    let app = routes::app(leptos_options, &config.assets_dir);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
