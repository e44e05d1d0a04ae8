use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label shown on the vertical divider at the boundary between actuals and
/// forecast.
pub const TODAY_MARKER_LABEL: &str = "Today";

/// A resampled series split into the historical and projected halves.
///
/// Both vectors have the length of the series they were split from. The
/// point at `marker_index` is present in both so the two lines join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartitionedSeries {
    pub actual: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
    pub marker_index: usize,
}

impl PartitionedSeries {
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }
}

/// Everything the chart renderer needs to draw the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Historical values, null where the forecast takes over
    pub actual_series: Vec<Option<f64>>,
    /// Forecasted values, null before the marker
    pub forecast_series: Vec<Option<f64>>,
    /// Category labels of the x axis
    pub labels: Vec<String>,
    /// Position of the "today" divider on the x axis
    pub marker_index: usize,
    /// Text of the divider
    pub marker_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_state_serializes_camel_case() {
        let state = DisplayState {
            actual_series: vec![Some(1.0), Some(2.0), None],
            forecast_series: vec![None, Some(2.0), Some(3.5)],
            labels: vec!["Aug".to_string(), "Sep".to_string(), "Oct".to_string()],
            marker_index: 1,
            marker_label: TODAY_MARKER_LABEL.to_string(),
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["actualSeries"], serde_json::json!([1.0, 2.0, null]));
        assert_eq!(json["forecastSeries"], serde_json::json!([null, 2.0, 3.5]));
        assert_eq!(json["markerIndex"], 1);
        assert_eq!(json["markerLabel"], "Today");

        let back: DisplayState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
