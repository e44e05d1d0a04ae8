//! The state behind one forecast chart.
//!
//! A [`ForecastSession`] is an immutable value. Every trigger (a granularity
//! selection or a new raw series from the prediction service) produces a new
//! session from the previous one, and the caller swaps it in as a whole.
//! Each trigger carries everything it needs, including the anchor date, so
//! nothing is read from ambient state.

use chrono::NaiveDate;
use common::{DisplayState, Granularity};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::pipeline::ForecastPipeline;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSession {
    raw_series: Option<Vec<f64>>,
    granularity: Option<Granularity>,
    display: Option<DisplayState>,
}

impl ForecastSession {
    /// A session with no data yet and an optional preselected granularity.
    pub fn new(granularity: Option<Granularity>) -> Self {
        Self {
            raw_series: None,
            granularity,
            display: None,
        }
    }

    pub fn raw_series(&self) -> Option<&[f64]> {
        self.raw_series.as_deref()
    }

    pub fn granularity(&self) -> Option<Granularity> {
        self.granularity
    }

    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    /// Handles a value coming from the granularity selector.
    ///
    /// Returns `Ok(None)` when the value is not a known granularity; the
    /// session is then left as it is.
    pub fn select_granularity(
        &self,
        pipeline: &ForecastPipeline,
        value: &str,
        anchor: NaiveDate,
    ) -> Result<Option<Self>> {
        match value.parse::<Granularity>() {
            Ok(granularity) => self.with_granularity(pipeline, granularity, anchor).map(Some),
            Err(e) => {
                debug!("Ignoring granularity selection: {}", e);
                Ok(None)
            }
        }
    }

    /// Selects `granularity` and recomputes from the current series.
    ///
    /// When nothing can be computed, a display built for another granularity
    /// is dropped so the session never pairs a granularity with a chart that
    /// does not match it.
    #[instrument(skip(self, pipeline), fields(anchor = %anchor))]
    pub fn with_granularity(
        &self,
        pipeline: &ForecastPipeline,
        granularity: Granularity,
        anchor: NaiveDate,
    ) -> Result<Self> {
        let display = match recompute(pipeline, self.raw_series(), Some(granularity), anchor)? {
            Some(display) => Some(display),
            None if self.granularity == Some(granularity) => self.display.clone(),
            None => None,
        };
        Ok(Self {
            raw_series: self.raw_series.clone(),
            granularity: Some(granularity),
            display,
        })
    }

    /// Installs a fresh raw series and recomputes with the selected
    /// granularity, if any.
    #[instrument(skip(self, pipeline, raw_series), fields(raw_len = raw_series.len(), anchor = %anchor))]
    pub fn with_raw_series(
        &self,
        pipeline: &ForecastPipeline,
        raw_series: Vec<f64>,
        anchor: NaiveDate,
    ) -> Result<Self> {
        let display = recompute(pipeline, Some(&raw_series), self.granularity, anchor)?;
        Ok(Self {
            raw_series: Some(raw_series),
            granularity: self.granularity,
            display: display.or_else(|| self.display.clone()),
        })
    }
}

/// Runs the pipeline when there is both a non-empty series and a selected
/// granularity. `None` means nothing was computed.
fn recompute(
    pipeline: &ForecastPipeline,
    raw_series: Option<&[f64]>,
    granularity: Option<Granularity>,
    anchor: NaiveDate,
) -> Result<Option<DisplayState>> {
    let (raw, granularity) = match (raw_series, granularity) {
        (Some(raw), Some(granularity)) if !raw.is_empty() => (raw, granularity),
        (None, _) => {
            debug!("No raw series yet, skipping recomputation");
            return Ok(None);
        }
        (Some(raw), _) if raw.is_empty() => {
            debug!("Raw series is empty, skipping recomputation");
            return Ok(None);
        }
        _ => {
            debug!("No granularity selected, skipping recomputation");
            return Ok(None);
        }
    };

    let state = pipeline.run(raw, granularity, anchor)?;
    info!("Recomputed {} forecast display for {}", granularity, anchor);
    Ok(Some(state))
}
