use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use common::{Algorithm, Granularity};

pub mod commands;

use commands::{preview, serve};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "salesvision")]
#[command(about = "SalesVision forecast chart service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        #[arg(short, long, env = "SALESVISION_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Base URL of the prediction service, `/prediction` is appended
        #[arg(short, long, env = "SALESVISION_PREDICTION_URL")]
        prediction_url: Option<String>,
    },
    /// Run one prediction and print the chart data as JSON
    ///
    /// Examples:
    ///   salesvision preview --algorithm Arima --granularity weekly --option "Store 1"
    Preview {
        /// Forecasting algorithm: Smoothing, Arima, Sarima or Prophet
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Display granularity: daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        granularity: Granularity,

        /// Option forwarded to the prediction service, repeat for several
        #[arg(short = 'o', long = "option", required = true)]
        options: Vec<String>,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        anchor_date: Option<NaiveDate>,

        /// Base URL of the prediction service
        #[arg(short, long, env = "SALESVISION_PREDICTION_URL")]
        prediction_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::load()?;

        match self.command {
            Commands::Serve { bind_address, prediction_url } => {
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(prediction_url) = prediction_url {
                    settings.prediction_url = prediction_url;
                }
                serve(&settings).await?;
            }
            Commands::Preview {
                algorithm,
                granularity,
                options,
                anchor_date,
                prediction_url,
            } => {
                if let Some(prediction_url) = prediction_url {
                    settings.prediction_url = prediction_url;
                }
                if anchor_date.is_some() {
                    settings.anchor_date = anchor_date;
                }
                preview(&settings, algorithm, granularity, options).await?;
            }
        }
        Ok(())
    }
}
