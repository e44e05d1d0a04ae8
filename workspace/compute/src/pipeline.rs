use chrono::NaiveDate;
use common::{DisplayState, Granularity};
use tracing::{debug, instrument};

use crate::display::build_display_state;
use crate::error::Result;
use crate::partition::partition;
use crate::resample::Resampler;

/// Resample, partition and label a raw series in one pass.
#[derive(Debug, Clone, Default)]
pub struct ForecastPipeline {
    resampler: Resampler,
}

impl ForecastPipeline {
    pub fn new(resampler: Resampler) -> Self {
        Self { resampler }
    }

    pub fn resampler(&self) -> &Resampler {
        &self.resampler
    }

    #[instrument(skip(self, raw), fields(raw_len = raw.len(), granularity = %granularity, anchor = %anchor))]
    pub fn run(&self, raw: &[f64], granularity: Granularity, anchor: NaiveDate) -> Result<DisplayState> {
        let resampled = self.resampler.resample(raw, granularity, anchor)?;
        let partitioned = partition(&resampled.values, resampled.boundary_index);
        let state = build_display_state(partitioned, resampled.labels);

        debug!(
            "Built {} display state with {} points, marker at {}",
            granularity,
            state.labels.len(),
            state.marker_index
        );
        Ok(state)
    }
}
