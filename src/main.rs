//! HTTP service entry point for the stay pricing engine.

use std::path::PathBuf;

use clap::Parser;
use stay_pricing::api::{AppState, create_router};
use stay_pricing::config::{CatalogLoader, LOG_VAR, ServerSettings};
use stay_pricing::error::{EngineError, EngineResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "stay-pricing",
    about = "Serve stay price quotes for a resort catalog",
    version
)]
struct Cli {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Override the catalog directory
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> EngineResult<()> {
    let cli = Cli::parse();

    let mut settings = ServerSettings::from_env()?;
    if let Some(host) = cli.host {
        settings.host = host;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }
    if let Some(catalog) = cli.catalog {
        settings.catalog_dir = catalog;
    }

    init_tracing(&settings.log_level)?;

    let catalog = CatalogLoader::load(&settings.catalog_dir)?;
    info!(
        resort = %catalog.resort().code,
        accommodation_types = catalog.catalog().accommodation_types().len(),
        addons = catalog.catalog().addons().len(),
        rate_adjustments = catalog.rate_adjustments().len(),
        "Catalog loaded"
    );

    let addr = settings.socket_addr()?;
    let app = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Stay pricing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Installs the log subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) -> EngineResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| EngineError::InvalidSetting {
            key: LOG_VAR.to_string(),
            message: format!("'{}' is not a valid log filter ({})", log_level, e),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}
