pub mod display;
pub mod error;
pub mod labels;
pub mod partition;
pub mod pipeline;
pub mod resample;
pub mod session;
pub mod window;

use labels::DateLabelFormat;
use pipeline::ForecastPipeline;
use resample::Resampler;
use window::WindowConfig;

pub use error::{ComputeError, Result};

/// Returns a pipeline for the given window and label format.
///
/// `default_pipeline()` uses the 60 day history / 120 day forecast window
/// with US-style date labels, which is what the chart shows out of the box.
pub fn pipeline_with(window: WindowConfig, date_label_format: &str) -> Result<ForecastPipeline> {
    let resampler = Resampler::new(window, DateLabelFormat::new(date_label_format)?)?;
    Ok(ForecastPipeline::new(resampler))
}

pub fn default_pipeline() -> ForecastPipeline {
    ForecastPipeline::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::Granularity;

    #[test]
    fn test_default_pipeline_matches_default_window() {
        let pipeline = default_pipeline();
        assert_eq!(pipeline.resampler().window(), &WindowConfig::default());
        assert_eq!(pipeline.resampler().label_format().as_str(), labels::DEFAULT_DATE_LABEL_FORMAT);
    }

    #[test]
    fn test_pipeline_with_rejects_bad_configuration() {
        assert!(matches!(
            pipeline_with(WindowConfig::default(), "%Q"),
            Err(ComputeError::LabelFormat(_))
        ));

        let window = WindowConfig {
            future_window_days: 10,
            ..WindowConfig::default()
        };
        assert!(matches!(pipeline_with(window, "%d.%m."), Err(ComputeError::InvalidWindow(_))));
    }

    #[test]
    fn test_pipeline_with_custom_format() {
        let pipeline = pipeline_with(WindowConfig::default(), "%d.%m.%Y").unwrap();
        let anchor = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let state = pipeline.run(&[1.0; 180], Granularity::Daily, anchor).unwrap();
        assert_eq!(state.labels[60], "19.10.2026");
    }
}
