use common::{DisplayState, PartitionedSeries, TODAY_MARKER_LABEL};
use tracing::warn;

/// Aligns a partition to the label axis and attaches the "Today" marker.
///
/// Series shorter than the axis are padded with nulls, which is how the chart
/// shows categories that have no bucket (most of the weekly axis and
/// the seventh month). Series longer than the axis are cut to it.
pub fn build_display_state(partition: PartitionedSeries, labels: Vec<String>) -> DisplayState {
    let axis_len = labels.len();
    if partition.len() > axis_len {
        warn!(
            "Series has {} points but only {} labels, dropping the tail",
            partition.len(),
            axis_len
        );
    }

    DisplayState {
        actual_series: align(partition.actual, axis_len),
        forecast_series: align(partition.forecast, axis_len),
        labels,
        marker_index: partition.marker_index,
        marker_label: TODAY_MARKER_LABEL.to_string(),
    }
}

fn align(mut series: Vec<Option<f64>>, len: usize) -> Vec<Option<f64>> {
    series.resize(len, None);
    series
}
