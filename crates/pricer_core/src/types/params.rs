//! Model inputs for a European call priced under geometric Brownian motion.

use super::error::PricingError;

/// Immutable simulation parameters, supplied once per run.
///
/// The discount factor is carried as a caller-owned value. [`SimulationParams::new`]
/// fills it with `exp(-rate * maturity)` for convenience; callers that already
/// hold a discount factor (for example from a curve) override it with
/// [`SimulationParams::with_discount`]. The pricing engine never recomputes it.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationParams;
///
/// let params = SimulationParams::new(100.0, 95.0, 0.05, 0.2, 1.0);
/// assert!((params.discount - (-0.05_f64).exp()).abs() < 1e-15);
///
/// let params = params.with_discount(0.9);
/// assert_eq!(params.discount, 0.9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParams {
    /// Spot price S0 (> 0).
    pub spot: f64,
    /// Strike K (> 0).
    pub strike: f64,
    /// Continuously compounded risk-free rate r.
    pub rate: f64,
    /// Volatility sigma (>= 0).
    pub volatility: f64,
    /// Time to maturity T in years (> 0).
    pub maturity: f64,
    /// Present value discount factor (> 0).
    pub discount: f64,
}

impl SimulationParams {
    /// Creates parameters with the discount factor set to `exp(-rate * maturity)`.
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            discount: (-rate * maturity).exp(),
        }
    }

    /// Replaces the discount factor with a caller-supplied value.
    #[inline]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Deterministic forward price `S0 * exp(r * T)`.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// Validates every field.
    ///
    /// NaN fails every check, so NaN inputs are rejected rather than simulated.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] naming the first offending field:
    /// - `spot`, `strike`: not strictly positive and finite
    /// - `rate`: not finite
    /// - `volatility`: negative or not finite
    /// - `maturity`: not strictly positive and finite (zero maturity with positive
    ///   volatility is reported separately since `sqrt(T)` has no meaning there)
    /// - `discount`: not strictly positive and finite
    pub fn validate(&self) -> Result<(), PricingError> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;

        if !self.rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }

        if !(self.volatility >= 0.0) || !self.volatility.is_finite() {
            return Err(PricingError::invalid(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }

        if self.maturity == 0.0 && self.volatility > 0.0 {
            return Err(PricingError::invalid(
                "maturity",
                format!(
                    "zero maturity with volatility {} leaves the diffusion term undefined",
                    self.volatility
                ),
            ));
        }
        require_positive("maturity", self.maturity)?;
        require_positive("discount", self.discount)?;

        Ok(())
    }
}

#[inline]
fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be positive and finite, got {}", value),
        ))
    }
}
