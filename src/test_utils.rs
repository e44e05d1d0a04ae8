#[cfg(test)]
pub mod test_utils {
    use crate::prediction::{PredictionError, PredictionService};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use async_trait::async_trait;
    use axum::Router;
    use chrono::NaiveDate;
    use common::{Granularity, PredictionRequest};
    use compute::{default_pipeline, session::ForecastSession};
    use std::sync::{Arc, Mutex};
    use tokio::sync::RwLock;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Anchor date used by every service test
    pub fn test_anchor_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    /// 180 days of sales, 10.0 on every day of the window
    pub fn flat_series() -> Vec<f64> {
        vec![10.0; 180]
    }

    /// Prediction service stand-in that replays scripted responses.
    ///
    /// Each call pops the next response; once the script is exhausted every
    /// call fails. Received requests are recorded.
    #[derive(Debug, Default)]
    pub struct StubPredictionService {
        responses: Mutex<Vec<Result<Vec<f64>, u16>>>,
        requests: Mutex<Vec<PredictionRequest>>,
    }

    impl StubPredictionService {
        pub fn new(responses: Vec<Result<Vec<f64>, u16>>) -> Self {
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<PredictionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictionService for StubPredictionService {
        async fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.responses.lock().unwrap().pop() {
                Some(Ok(series)) => Ok(series),
                Some(Err(status)) => Err(PredictionError::Api {
                    status,
                    body: "stubbed failure".to_string(),
                }),
                None => Err(PredictionError::Api {
                    status: 503,
                    body: "no scripted response left".to_string(),
                }),
            }
        }

        fn endpoint(&self) -> String {
            "stub://prediction".to_string()
        }
    }

    /// Create AppState for testing
    pub fn setup_test_app_state(
        predictor: Arc<StubPredictionService>,
        granularity: Option<Granularity>,
    ) -> AppState {
        AppState {
            pipeline: Arc::new(default_pipeline()),
            predictor,
            session: Arc::new(RwLock::new(ForecastSession::new(granularity))),
            anchor_date: Some(test_anchor_date()),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, returning the guard that keeps test
    /// tracing installed for the caller's scope.
    pub fn setup_test_app(
        predictor: Arc<StubPredictionService>,
        granularity: Option<Granularity>,
    ) -> (Router, tracing::subscriber::DefaultGuard) {
        let guard = init_test_tracing();
        let state = setup_test_app_state(predictor, granularity);
        (create_router(state), guard)
    }
}
