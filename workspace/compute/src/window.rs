//! Window sizing for the resampler.
//!
//! The forecast chart always shows a fixed window around "today": a number of
//! days of history followed by a number of days of forecast. The raw series
//! handed to the resampler is expected to start at the first day of that
//! window, so day offset `past_window_days` is today.

use common::Granularity;

use crate::error::{ComputeError, Result};

pub const DEFAULT_PAST_WINDOW_DAYS: usize = 60;
pub const DEFAULT_FUTURE_WINDOW_DAYS: usize = 120;
pub const DEFAULT_DAILY_BUCKET_DAYS: usize = 1;
pub const DEFAULT_WEEKLY_BUCKET_DAYS: usize = 7;
pub const DEFAULT_MONTHLY_BUCKET_DAYS: usize = 30;

/// Sizes of the display window and of the buckets used for each granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Days of history before the anchor date
    pub past_window_days: usize,
    /// Days of forecast starting at the anchor date
    pub future_window_days: usize,
    pub daily_bucket_days: usize,
    pub weekly_bucket_days: usize,
    pub monthly_bucket_days: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            past_window_days: DEFAULT_PAST_WINDOW_DAYS,
            future_window_days: DEFAULT_FUTURE_WINDOW_DAYS,
            daily_bucket_days: DEFAULT_DAILY_BUCKET_DAYS,
            weekly_bucket_days: DEFAULT_WEEKLY_BUCKET_DAYS,
            monthly_bucket_days: DEFAULT_MONTHLY_BUCKET_DAYS,
        }
    }
}

/// Where the buckets of one granularity start inside the raw window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLayout {
    /// Number of raw days summed into each bucket
    pub width: usize,
    /// Day offset of the first element of each bucket, past buckets first
    pub starts: Vec<usize>,
    /// Index of the first bucket that starts on or after the anchor date
    pub boundary_index: usize,
}

impl WindowConfig {
    /// Creates a window with the default bucket widths.
    pub fn new(past_window_days: usize, future_window_days: usize) -> Result<Self> {
        let config = Self {
            past_window_days,
            future_window_days,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every granularity yields at least one forecast bucket.
    pub fn validate(&self) -> Result<()> {
        if self.past_window_days == 0 {
            return Err(ComputeError::InvalidWindow(
                "past_window_days must be greater than zero".to_string(),
            ));
        }
        for granularity in Granularity::ALL {
            let width = self.bucket_width(granularity);
            if width == 0 {
                return Err(ComputeError::InvalidWindow(format!(
                    "{} bucket width must be greater than zero",
                    granularity
                )));
            }
            if self.future_window_days < width {
                return Err(ComputeError::InvalidWindow(format!(
                    "future_window_days ({}) is shorter than one {} bucket ({} days)",
                    self.future_window_days, granularity, width
                )));
            }
        }
        Ok(())
    }

    pub fn bucket_width(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Daily => self.daily_bucket_days,
            Granularity::Weekly => self.weekly_bucket_days,
            Granularity::Monthly => self.monthly_bucket_days,
        }
    }

    /// Length of the raw window in days.
    pub fn total_days(&self) -> usize {
        self.past_window_days + self.future_window_days
    }

    /// Lays out the buckets for `granularity`.
    ///
    /// The past segment `[0, past)` and the future segment `[past, total)` are
    /// each tiled from their start with whole buckets. A bucket that would
    /// cross the end of its segment is dropped, so when the past window is not
    /// a multiple of the bucket width the days just before the anchor belong to
    /// no bucket (for weekly buckets over a 60 day history, days 56..60).
    ///
    /// The daily axis includes the last day of the window, so the daily future
    /// segment runs one bucket further: `[past, total + width)`.
    pub fn layout(&self, granularity: Granularity) -> BucketLayout {
        let width = self.bucket_width(granularity);
        let future_end = match granularity {
            Granularity::Daily => self.total_days() + width,
            Granularity::Weekly | Granularity::Monthly => self.total_days(),
        };
        let past = whole_bucket_starts(0, self.past_window_days, width);
        let future = whole_bucket_starts(self.past_window_days, future_end, width);

        let boundary_index = past.len();
        let mut starts = past;
        starts.extend(future);

        BucketLayout {
            width,
            starts,
            boundary_index,
        }
    }
}

fn whole_bucket_starts(segment_start: usize, segment_end: usize, width: usize) -> Vec<usize> {
    if width == 0 {
        return Vec::new();
    }
    (segment_start..segment_end)
        .step_by(width)
        .take_while(|start| start + width <= segment_end)
        .collect()
}
