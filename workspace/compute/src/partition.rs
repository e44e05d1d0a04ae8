use std::cmp::Ordering;

use common::PartitionedSeries;
use tracing::trace;

/// Splits `values` into actual and forecast halves at `boundary_index`.
///
/// Values before the boundary are actuals, values after it are forecast, and
/// the value at the boundary belongs to both so the two lines meet. A
/// boundary at or past the end leaves the forecast empty.
pub fn partition(values: &[f64], boundary_index: usize) -> PartitionedSeries {
    let (actual, forecast): (Vec<_>, Vec<_>) = values
        .iter()
        .enumerate()
        .map(|(i, value)| match i.cmp(&boundary_index) {
            Ordering::Less => (Some(*value), None),
            Ordering::Equal => (Some(*value), Some(*value)),
            Ordering::Greater => (None, Some(*value)),
        })
        .unzip();

    trace!("Partitioned {} values at index {}", values.len(), boundary_index);

    PartitionedSeries {
        actual,
        forecast,
        marker_index: boundary_index,
    }
}
