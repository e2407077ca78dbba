use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use reqwest::Client as HTTPClient;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use vdl_parking_store::SnapshotStore;

use crate::config::{Cli, Config};
mod config;
mod logging;
mod notifier;
mod parking;
mod run;
mod source;

#[instrument(skip_all, fields(data_url = %config.data_url))]
async fn handler(http_client: &HTTPClient, config: &Config) -> Result<()> {
    let store = SnapshotStore::new(&config.status_file);
    let result = run::run_once(http_client, config, &store, Utc::now()).await?;
    let summary = serde_json::to_string(&result)?;
    info!(
        target: logging::TARGET,
        event = "run.completed",
        result = %summary,
        "{}",
        result.message
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .init();

    let config = Config::try_from(Cli::parse())?;

    let http_client = HTTPClient::builder().timeout(config.timeout).build()?;

    handler(&http_client, &config).await
}
