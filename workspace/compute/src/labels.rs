//! Axis label generation anchored to a reference date.

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::error::{ComputeError, Result};

/// US-style short date, the way a browser in the `en-US` locale prints it.
pub const DEFAULT_DATE_LABEL_FORMAT: &str = "%-m/%-d/%Y";

/// A validated chrono format string for day labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabelFormat(String);

impl DateLabelFormat {
    pub fn new(format: &str) -> Result<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ComputeError::LabelFormat(format.to_string()));
        }
        Ok(Self(format.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }
}

impl Default for DateLabelFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_LABEL_FORMAT.to_string())
    }
}

/// One label per step for `i` in `-steps_before..=steps_after`, dated
/// `anchor + i * step_days`.
pub fn stepped_date_labels(
    anchor: NaiveDate,
    steps_before: usize,
    steps_after: usize,
    step_days: usize,
    format: &DateLabelFormat,
) -> Result<Vec<String>> {
    let before = i64::try_from(steps_before)
        .map_err(|_| ComputeError::Date(format!("{} steps before the anchor is out of range", steps_before)))?;
    let after = i64::try_from(steps_after)
        .map_err(|_| ComputeError::Date(format!("{} steps after the anchor is out of range", steps_after)))?;
    let step = i64::try_from(step_days)
        .map_err(|_| ComputeError::Date(format!("step of {} days is out of range", step_days)))?;

    (-before..=after)
        .map(|i| {
            let offset = i
                .checked_mul(step)
                .and_then(Duration::try_days)
                .ok_or_else(|| ComputeError::Date(format!("offset of {} x {} days overflows", i, step)))?;
            let date = anchor
                .checked_add_signed(offset)
                .ok_or_else(|| ComputeError::Date(format!("{} + {} days is out of range", anchor, i * step)))?;
            Ok(format.format(date))
        })
        .collect()
}

/// Abbreviated month names from `months_before` months before the anchor's
/// month through `months_after` months after it, both ends included.
pub fn month_labels(anchor: NaiveDate, months_before: usize, months_after: usize) -> Result<Vec<String>> {
    let first_of_month = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
        .ok_or_else(|| ComputeError::Date(format!("no first day of month for {}", anchor)))?;
    let start = months(months_before)
        .and_then(|m| first_of_month.checked_sub_months(m))
        .ok_or_else(|| ComputeError::Date(format!("{} months before {} is out of range", months_before, anchor)))?;

    (0..=months_before + months_after)
        .map(|k| {
            months(k)
                .and_then(|m| start.checked_add_months(m))
                .map(|date| date.format("%b").to_string())
                .ok_or_else(|| ComputeError::Date(format!("{} months after {} is out of range", k, start)))
        })
        .collect()
}

fn months(count: usize) -> Option<Months> {
    u32::try_from(count).ok().map(Months::new)
}
