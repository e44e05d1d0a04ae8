//! Common transport-layer types shared between the forecast service and
//! whatever renders its output. These structs mirror the JSON payloads the
//! service accepts and returns so a renderer can deserialize them without
//! duplicating shapes.

mod display;
mod granularity;
mod prediction;

pub use display::{DisplayState, PartitionedSeries, TODAY_MARKER_LABEL};
pub use granularity::Granularity;
pub use prediction::{Algorithm, PredictionRequest};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error payload returned alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}
