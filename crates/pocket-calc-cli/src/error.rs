//! Error types for the CLI

use pocket_calc::core::CalcError;
use pocket_calc::weather::WeatherError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
///
/// A calculation that ends on the `Error` display is a normal result, not a
/// `CliError`. Only bad input and I/O end up here.
#[derive(Debug, Error)]
pub enum CliError {
    /// Token label rejected by the calculator
    #[error("Invalid input: {0}")]
    Calc(#[from] CalcError),

    /// Weather document missing data or area not found
    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),

    /// HTTP request failed
    #[cfg(feature = "network")]
    #[error("Fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Feature not compiled in
    #[error("{feature} support not enabled. Rebuild with --features {feature}")]
    FeatureDisabled {
        /// Cargo feature name
        feature: &'static str,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
