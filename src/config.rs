use anyhow::{Context, Result};
use chrono::NaiveDate;
use common::Granularity;
use compute::{pipeline_with, session::ForecastSession, window::WindowConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::prediction::HttpPredictionService;
use crate::schemas::AppState;

/// Service settings.
///
/// Read from built-in defaults, then an optional `salesvision.toml` in the
/// working directory, then `SALESVISION_*` environment variables (a `.env`
/// file is loaded first).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    /// Base URL of the prediction service, `/prediction` is appended
    pub prediction_url: String,
    pub request_timeout_secs: u64,
    pub past_window_days: usize,
    pub future_window_days: usize,
    pub date_label_format: String,
    /// Granularity selected before the user picks one
    pub default_granularity: Option<Granularity>,
    /// Fixed "today"; the current local date is used when unset
    pub anchor_date: Option<NaiveDate>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name("salesvision").required(false))
            .add_source(Environment::with_prefix("SALESVISION"));
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("prediction_url", "http://localhost:5000")?
            .set_default("request_timeout_secs", 30_i64)?
            .set_default("past_window_days", 60_i64)?
            .set_default("future_window_days", 120_i64)?
            .set_default("date_label_format", compute::labels::DEFAULT_DATE_LABEL_FORMAT)?
            .set_default("default_granularity", "daily")?
            .build()?
            .try_deserialize()
            .context("Failed to read settings")?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn window(&self) -> Result<WindowConfig> {
        WindowConfig::new(self.past_window_days, self.future_window_days).context("Invalid forecast window")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    let pipeline = pipeline_with(settings.window()?, &settings.date_label_format)
        .context("Invalid forecast pipeline configuration")?;

    info!("Using prediction service at {}", settings.prediction_url);
    let predictor = HttpPredictionService::new(&settings.prediction_url, settings.request_timeout())?;

    Ok(AppState {
        pipeline: Arc::new(pipeline),
        predictor: Arc::new(predictor),
        session: Arc::new(RwLock::new(ForecastSession::new(settings.default_granularity))),
        anchor_date: settings.anchor_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_builder(Config::builder()).unwrap();

        assert_eq!(settings.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.prediction_url, "http://localhost:5000");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.default_granularity, Some(Granularity::Daily));
        assert_eq!(settings.anchor_date, None);
        assert_eq!(settings.window().unwrap(), WindowConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            prediction_url = "http://predictor:8000"
            past_window_days = 30
            future_window_days = 60
            default_granularity = "monthly"
            anchor_date = "2026-10-19"
        "#;
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(settings.prediction_url, "http://predictor:8000");
        assert_eq!(settings.default_granularity, Some(Granularity::Monthly));
        assert_eq!(settings.anchor_date, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(settings.window().unwrap().total_days(), 90);
    }

    #[test]
    fn test_invalid_window_is_reported() {
        let builder = Config::builder().add_source(File::from_str("future_window_days = 5", FileFormat::Toml));
        let settings = Settings::from_builder(builder).unwrap();

        assert!(settings.window().is_err());
        assert!(initialize_app_state(&settings).is_err());
    }

    #[tokio::test]
    async fn test_initialize_app_state() {
        let settings = Settings::from_builder(Config::builder()).unwrap();
        let state = initialize_app_state(&settings).unwrap();

        assert_eq!(state.predictor.endpoint(), "http://localhost:5000/prediction");
        let session = state.session.read().await;
        assert_eq!(session.granularity(), Some(Granularity::Daily));
        assert!(session.display().is_none());
    }
}
