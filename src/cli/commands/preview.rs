use anyhow::{bail, Context, Result};
use common::{Algorithm, Granularity, PredictionRequest};
use compute::pipeline_with;
use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::prediction::{HttpPredictionService, PredictionService};

/// Fetches one prediction and prints the resulting chart data to stdout.
pub async fn preview(
    settings: &Settings,
    algorithm: Algorithm,
    granularity: Granularity,
    options: Vec<String>,
) -> Result<()> {
    if options.is_empty() {
        bail!("Choose an option first");
    }

    let pipeline = pipeline_with(settings.window()?, &settings.date_label_format)?;
    let predictor = HttpPredictionService::new(&settings.prediction_url, settings.request_timeout())?;
    let anchor = settings.anchor_date.unwrap_or_else(|| Local::now().date_naive());
    debug!("Previewing {} forecast anchored at {}", granularity, anchor);

    let request = PredictionRequest { algorithm, options };
    let raw_series = predictor
        .predict(&request)
        .await
        .with_context(|| format!("Prediction with {} failed", algorithm))?;

    if raw_series.is_empty() {
        warn!("Prediction service returned an empty series, nothing to display");
        return Ok(());
    }

    let state = pipeline.run(&raw_series, granularity, anchor)?;
    info!("Built {} chart with {} labels", granularity, state.labels.len());
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
