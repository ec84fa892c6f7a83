//! CLI error types and exit codes.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by the `mcprice` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the inputs or produced a non-finite aggregate.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration file or environment could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Result could not be serialised.
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// The global rayon pool could not be sized.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// `2` for invalid pricing inputs, `3` for numeric anomalies, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Pricing(PricingError::InvalidParameter { .. }) => 2,
            CliError::Pricing(PricingError::NumericAnomaly { .. }) => 3,
            _ => 1,
        }
    }
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let invalid = CliError::from(PricingError::invalid("n_paths", "must be positive, got 0"));
        assert_eq!(invalid.exit_code(), 2);

        let anomaly = CliError::from(PricingError::NumericAnomaly {
            stage: "reduction",
            value: f64::NAN,
        });
        assert_eq!(anomaly.exit_code(), 3);

        let usage = clap::Error::new(clap::error::ErrorKind::UnknownArgument);
        assert_eq!(CliError::from(usage).exit_code(), 1);
        assert_eq!(
            CliError::from(config::ConfigError::Message("bad".into())).exit_code(),
            1
        );
    }

    #[test]
    fn test_pricing_error_display_is_transparent() {
        let err = CliError::from(PricingError::invalid("spot", "must be positive and finite, got 0"));
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'spot': must be positive and finite, got 0"
        );
    }
}
