//! Daily wage engine server.
//!
//! Usage: `daily-wage-engine [CONFIG_PATH]`. The config path may also be given
//! through `DAILY_WAGE_CONFIG`. Without either, built-in defaults are used.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use daily_wage_engine::api::{AppState, create_router};
use daily_wage_engine::config::ConfigLoader;
use daily_wage_engine::store::RecordStore;

const CONFIG_ENV_VAR: &str = "DAILY_WAGE_CONFIG";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_config() -> Result<ConfigLoader> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

    match path {
        Some(path) => ConfigLoader::load(&path)
            .with_context(|| format!("failed to load configuration from {path}")),
        None => {
            info!("No configuration file given, using defaults");
            Ok(ConfigLoader::default())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let store = RecordStore::new(config.default_pf_percentage());
    let router = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    info!(
        bind_address = %config.bind_address(),
        pf_percentage = %config.default_pf_percentage(),
        version = env!("CARGO_PKG_VERSION"),
        "Daily wage engine listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
