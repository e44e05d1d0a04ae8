use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Forecasting algorithms offered by the remote prediction service.
///
/// Serialized verbatim (`"Smoothing"`, `"Arima"`, ...) because the service
/// matches on these exact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Algorithm {
    Smoothing,
    Arima,
    Sarima,
    Prophet,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Smoothing => "Smoothing",
            Algorithm::Arima => "Arima",
            Algorithm::Sarima => "Sarima",
            Algorithm::Prophet => "Prophet",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Smoothing" => Ok(Algorithm::Smoothing),
            "Arima" => Ok(Algorithm::Arima),
            "Sarima" => Ok(Algorithm::Sarima),
            "Prophet" => Ok(Algorithm::Prophet),
            other => Err(format!("Unknown algorithm: {}", other)),
        }
    }
}

/// Body of `POST /prediction` on the remote prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionRequest {
    /// Algorithm the service should run
    pub algorithm: Algorithm,
    /// Selected options (products, stores, ...) forwarded untouched
    pub options: Vec<String>,
}
