//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and Monte Carlo runs

use thiserror::Error;

/// Categorised pricing errors.
///
/// Both variants are returned to the immediate caller without retry.
///
/// # Variants
/// - `InvalidParameter`: Rejected input, detected before any simulation work
/// - `NumericAnomaly`: A NaN or infinite value reached the final aggregate
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("n_paths", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'n_paths': must be positive, got 0"
/// );
/// assert!(err.is_invalid_parameter());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Invalid input parameter.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Non-finite value observed in a contribution or partial sum.
    #[error("Numeric anomaly in {stage}: aggregate is {value}")]
    NumericAnomaly {
        /// Pipeline stage where the anomaly became visible.
        stage: &'static str,
        /// The offending value (NaN or ±inf).
        value: f64,
    },
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    #[inline]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`PricingError::InvalidParameter`].
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` for [`PricingError::NumericAnomaly`].
    #[inline]
    pub fn is_numeric_anomaly(&self) -> bool {
        matches!(self, Self::NumericAnomaly { .. })
    }
}
