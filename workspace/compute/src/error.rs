use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, PartialEq)]
pub enum ComputeError {
    /// The resampling window cannot produce buckets
    #[error("Invalid window configuration: {0}")]
    InvalidWindow(String),

    /// A label date fell outside the representable calendar range
    #[error("Date error: {0}")]
    Date(String),

    /// The label format string is not a valid chrono format
    #[error("Invalid date label format: {0}")]
    LabelFormat(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
