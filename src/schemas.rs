use chrono::{Local, NaiveDate};
use common::{Algorithm, DisplayState, ErrorResponse, Granularity};
use compute::{pipeline::ForecastPipeline, session::ForecastSession};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

use crate::prediction::PredictionService;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Resample/partition pipeline built from the settings
    pub pipeline: Arc<ForecastPipeline>,
    /// Remote prediction service
    pub predictor: Arc<dyn PredictionService>,
    /// Current chart session, replaced as a whole on every trigger
    pub session: Arc<RwLock<ForecastSession>>,
    /// Fixed anchor date, mostly for tests and demos
    pub anchor_date: Option<NaiveDate>,
}

impl AppState {
    /// "Today" for the current request.
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Request body for generating a forecast
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct GenerateForecastRequest {
    /// Forecasting algorithm to run remotely
    pub algorithm: Algorithm,
    /// Selected options, forwarded to the prediction service
    #[validate(length(min = 1, message = "Choose an option first"))]
    pub options: Vec<String>,
}

/// Request body for changing the display granularity
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SelectGranularityRequest {
    /// Selector value: "daily", "weekly" or "monthly". Anything else is ignored.
    pub granularity: String,
}

/// Current state of the forecast chart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastView {
    /// Selected granularity, if any
    pub granularity: Option<Granularity>,
    /// Whether a raw series has been received
    pub has_data: bool,
    /// Data for the chart renderer, always built for `granularity`. Null
    /// until something was computed, or after switching granularity with no
    /// data to recompute from.
    pub display: Option<DisplayState>,
}

impl From<&ForecastSession> for ForecastView {
    fn from(session: &ForecastSession) -> Self {
        Self {
            granularity: session.granularity(),
            has_data: session.raw_series().is_some_and(|raw| !raw.is_empty()),
            display: session.display().cloned(),
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction endpoint in use
    pub prediction_service: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::generate_forecast,
        crate::handlers::forecast::select_granularity,
        crate::handlers::forecast::get_forecast,
    ),
    components(
        schemas(
            ApiResponse<ForecastView>,
            ErrorResponse,
            HealthResponse,
            GenerateForecastRequest,
            SelectGranularityRequest,
            ForecastView,
            DisplayState,
            Granularity,
            Algorithm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Sales forecast chart endpoints"),
    ),
    info(
        title = "SalesVision Forecast API",
        description = "Resamples forecasted sales into daily, weekly or monthly chart series",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
