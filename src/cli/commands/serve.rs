use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;

/// Builds the forecast state from `settings` and serves the API until the
/// listener fails.
pub async fn serve(settings: &Settings) -> Result<()> {
    debug!(
        "Serving with prediction service {} and a {}+{} day window",
        settings.prediction_url, settings.past_window_days, settings.future_window_days
    );

    let state = initialize_app_state(settings).context("Failed to initialize forecast service")?;
    let listener = TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_address))?;

    info!("SalesVision API listening on http://{}", settings.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", settings.bind_address);

    axum::serve(listener, create_router(state)).await.context("Server error")?;
    Ok(())
}
