use chrono::NaiveDate;
use common::Granularity;
use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::labels::{month_labels, stepped_date_labels, DateLabelFormat};
use crate::window::{BucketLayout, WindowConfig};

/// A raw daily series aggregated to one granularity, with its axis labels.
///
/// `labels` is not always as long as `values`, so the two are kept apart
/// rather than zipped: weekly labels cover the whole window in steps of one
/// bucket, and monthly labels include the month after the last full bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledSeries {
    pub granularity: Granularity,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// Index of the first bucket at or after the anchor date
    pub boundary_index: usize,
}

/// Aggregates raw per-day values into daily, weekly or monthly buckets.
#[derive(Debug, Clone, Default)]
pub struct Resampler {
    window: WindowConfig,
    label_format: DateLabelFormat,
}

impl Resampler {
    pub fn new(window: WindowConfig, label_format: DateLabelFormat) -> Result<Self> {
        window.validate()?;
        Ok(Self { window, label_format })
    }

    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn label_format(&self) -> &DateLabelFormat {
        &self.label_format
    }

    /// Buckets `raw` for `granularity` and labels the buckets relative to
    /// `anchor`.
    ///
    /// `raw[past_window_days]` is the value for `anchor`. Positions past the
    /// end of `raw` count as zero, so the number of buckets and the boundary
    /// index depend only on the window, never on the length of `raw`.
    #[instrument(skip(self, raw), fields(raw_len = raw.len(), granularity = %granularity, anchor = %anchor))]
    pub fn resample(&self, raw: &[f64], granularity: Granularity, anchor: NaiveDate) -> Result<ResampledSeries> {
        let layout = self.window.layout(granularity);
        let values = sum_buckets(raw, &layout);
        let labels = self.labels(granularity, anchor)?;

        let covered = layout.starts.last().map_or(0, |start| start + layout.width);
        if raw.len() < covered {
            debug!(
                "Raw series has {} values but buckets read {} days, missing days count as zero",
                raw.len(),
                covered
            );
        }
        trace!(
            "Resampled into {} buckets with {} labels, boundary at {}",
            values.len(),
            labels.len(),
            layout.boundary_index
        );

        Ok(ResampledSeries {
            granularity,
            values,
            labels,
            boundary_index: layout.boundary_index,
        })
    }

    fn labels(&self, granularity: Granularity, anchor: NaiveDate) -> Result<Vec<String>> {
        let window = &self.window;
        match granularity {
            // Weekly labels step one week per window day, so they run far past
            // the last weekly bucket.
            Granularity::Daily | Granularity::Weekly => stepped_date_labels(
                anchor,
                window.past_window_days,
                window.future_window_days,
                window.bucket_width(granularity),
                &self.label_format,
            ),
            Granularity::Monthly => {
                let width = window.monthly_bucket_days;
                month_labels(anchor, window.past_window_days / width, window.future_window_days / width)
            }
        }
    }
}

fn sum_buckets(raw: &[f64], layout: &BucketLayout) -> Vec<f64> {
    layout
        .starts
        .iter()
        .map(|&start| raw.iter().skip(start).take(layout.width).sum::<f64>())
        .collect()
}
