//! Black-Scholes European call pricing.
//!
//! # Mathematical Background
//!
//! Written against the forward `F = S₀·e^{rT}` and the supplied discount
//! factor `D`, so a caller-provided discount is honoured exactly as the
//! Monte Carlo engine honours it:
//!
//! ```text
//! d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! d₂ = d₁ − σ√T
//! C  = D · (F·N(d₁) − K·N(d₂))
//! ```
//!
//! With `D = e^{−rT}` this is the textbook `S·N(d₁) − K·e^{−rT}·N(d₂)`.
//! At `σ = 0` the price is the discounted forward intrinsic value.
//!
//! # References
//!
//! - Black, F. and Scholes, M. (1973). "The Pricing of Options and Corporate
//!   Liabilities." Journal of Political Economy, 81(3), 637-654.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{PricingError, SimulationParams};

/// Returns `(d₁, d₂)` for validated parameters with positive volatility.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] if `params` fails validation
/// or the volatility is zero (both terms are unbounded there).
pub fn d1_d2(params: &SimulationParams) -> Result<(f64, f64), PricingError> {
    params.validate()?;
    if params.volatility == 0.0 {
        return Err(PricingError::invalid(
            "volatility",
            "d1 and d2 are undefined at zero volatility",
        ));
    }

    let vol_sqrt_t = params.volatility * params.maturity.sqrt();
    let log_moneyness = (params.forward() / params.strike).ln();
    let d1 = (log_moneyness + 0.5 * vol_sqrt_t * vol_sqrt_t) / vol_sqrt_t;
    Ok((d1, d1 - vol_sqrt_t))
}

/// Black-Scholes price of a European call.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] if `params` fails validation.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::analytical::black_scholes_call;
///
/// let params = SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0);
/// let price = black_scholes_call(&params).unwrap();
/// assert!((price - 15.0401).abs() < 1e-4);
/// ```
pub fn black_scholes_call(params: &SimulationParams) -> Result<f64, PricingError> {
    params.validate()?;
    let forward = params.forward();

    if params.volatility == 0.0 {
        let intrinsic = forward - params.strike;
        return Ok(params.discount * if intrinsic > 0.0 { intrinsic } else { 0.0 });
    }

    let (d1, d2) = d1_d2(params)?;
    Ok(params.discount * (forward * norm_cdf(d1) - params.strike * norm_cdf(d2)))
}
