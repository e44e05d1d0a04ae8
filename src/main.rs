use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod handlers;
mod prediction;
mod router;
mod schemas;

#[cfg(test)]
mod openapi_tests;
mod test_utils;

use cli::Cli;

/// Main entry point for the SalesVision forecast service.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salesvision=debug,compute=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("SalesVision starting up");

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
