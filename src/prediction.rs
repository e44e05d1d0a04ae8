use async_trait::async_trait;
use common::PredictionRequest;
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors raised while talking to the remote prediction service.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// Network failure, timeout or an undecodable body
    #[error("Prediction request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Prediction service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid prediction service URL: {0}")]
    InvalidUrl(String),
}

/// Source of raw forecast series.
#[async_trait]
pub trait PredictionService: Send + Sync + fmt::Debug {
    /// Runs one prediction and returns the raw per-day series, earliest first.
    async fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError>;

    /// Where requests are sent, for health reporting.
    fn endpoint(&self) -> String;
}

/// Calls `POST {base_url}/prediction` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictionError> {
        let endpoint = format!("{}/prediction", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| PredictionError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        debug!("Requesting {} prediction for {} options", request.algorithm, request.options.len());

        // `json` sets `Content-Type: application/json`
        let response = self.client.post(self.endpoint.clone()).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown prediction service error".to_string());
            return Err(PredictionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let series = response.json::<Vec<f64>>().await?;
        info!("Prediction service returned {} values", series.len());
        Ok(series)
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}
