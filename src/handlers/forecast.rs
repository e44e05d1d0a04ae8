use axum::{extract::State, http::StatusCode, response::Json};
use common::{ErrorResponse, PredictionRequest};
use compute::ComputeError;
use tracing::{debug, error, info, instrument, trace, warn};
use validator::Validate;

use crate::schemas::{ApiResponse, AppState, ForecastView, GenerateForecastRequest, SelectGranularityRequest};

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn compute_error(e: ComputeError) -> HandlerError {
    error!("Failed to build forecast display: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("COMPUTE_ERROR", e.to_string())),
    )
}

/// Run a remote prediction and refresh the chart with its result
#[utoipa::path(
    post,
    path = "/api/v1/forecast/generate",
    tag = "forecast",
    request_body = GenerateForecastRequest,
    responses(
        (status = 200, description = "Prediction received and chart refreshed", body = ApiResponse<ForecastView>),
        (status = 400, description = "No option selected", body = ErrorResponse),
        (status = 502, description = "Prediction service failed, previous chart kept", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn generate_forecast(
    State(state): State<AppState>,
    Json(request): Json<GenerateForecastRequest>,
) -> Result<Json<ApiResponse<ForecastView>>, HandlerError> {
    trace!("Entering generate_forecast function");

    if let Err(errors) = request.validate() {
        warn!("Choose an option first: {}", errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("NO_OPTIONS_SELECTED", "Choose an option first")),
        ));
    }

    let prediction_request = PredictionRequest {
        algorithm: request.algorithm,
        options: request.options,
    };

    // The session lock is not held across the remote call; the refresh below
    // uses whatever granularity is selected once the prediction arrives.
    let raw_series = match state.predictor.predict(&prediction_request).await {
        Ok(series) => series,
        Err(e) => {
            warn!("Prediction with {} failed: {}", prediction_request.algorithm, e);
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("PREDICTION_FAILED", e.to_string())),
            ));
        }
    };
    debug!("Received {} raw values", raw_series.len());

    let anchor = state.anchor_date();
    let mut session = state.session.write().await;
    let next = session
        .with_raw_series(&state.pipeline, raw_series, anchor)
        .map_err(compute_error)?;
    *session = next;

    info!("Forecast generated with {}", prediction_request.algorithm);
    Ok(Json(ApiResponse {
        data: ForecastView::from(&*session),
        message: "Forecast generated successfully".to_string(),
        success: true,
    }))
}

/// Change the chart granularity
#[utoipa::path(
    put,
    path = "/api/v1/forecast/granularity",
    tag = "forecast",
    request_body = SelectGranularityRequest,
    responses(
        (status = 200, description = "Granularity applied, or ignored if unknown", body = ApiResponse<ForecastView>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn select_granularity(
    State(state): State<AppState>,
    Json(request): Json<SelectGranularityRequest>,
) -> Result<Json<ApiResponse<ForecastView>>, HandlerError> {
    trace!("Entering select_granularity function");

    let anchor = state.anchor_date();
    let mut session = state.session.write().await;
    let message = match session
        .select_granularity(&state.pipeline, &request.granularity, anchor)
        .map_err(compute_error)?
    {
        Some(next) => {
            *session = next;
            format!("Granularity set to {}", request.granularity)
        }
        None => "Unknown granularity ignored".to_string(),
    };

    Ok(Json(ApiResponse {
        data: ForecastView::from(&*session),
        message,
        success: true,
    }))
}

/// Get the current chart data
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    responses(
        (status = 200, description = "Current forecast chart", body = ApiResponse<ForecastView>)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(State(state): State<AppState>) -> Json<ApiResponse<ForecastView>> {
    let session = state.session.read().await;
    Json(ApiResponse {
        data: ForecastView::from(&*session),
        message: "Forecast retrieved successfully".to_string(),
        success: true,
    })
}
