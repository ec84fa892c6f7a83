//! Terminal price sampling under geometric Brownian motion.
//!
//! A European payoff only needs S(T), so each path takes one exact log-space
//! step from 0 to T instead of a time grid:
//!
//! ```text
//! S(T) = S₀ × exp((r − σ²/2)T + σ√T × Z),   Z ~ N(0, 1)
//! ```

use pricer_core::types::SimulationParams;

/// Precomputed GBM terminal-price map `Z ↦ S(T)`.
///
/// Drift and diffusion are computed once per run so each path costs one
/// fused multiply-add and one `exp`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::mc::GbmTerminal;
///
/// let params = SimulationParams::new(100.0, 100.0, 0.05, 0.0, 1.0);
/// let gbm = GbmTerminal::from_params(&params);
///
/// // Zero volatility collapses to the forward
/// assert!((gbm.terminal_price(1.7) - params.forward()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmTerminal {
    spot: f64,
    drift: f64,
    diffusion: f64,
}

impl GbmTerminal {
    /// Builds the map from validated parameters.
    ///
    /// Callers are expected to have run [`SimulationParams::validate`];
    /// in particular `maturity > 0`, so `sqrt(maturity)` is well defined.
    #[inline]
    pub fn from_params(params: &SimulationParams) -> Self {
        let sigma = params.volatility;
        let t = params.maturity;
        Self {
            spot: params.spot,
            drift: (params.rate - 0.5 * sigma * sigma) * t,
            diffusion: sigma * t.sqrt(),
        }
    }

    /// Total log drift `(r − σ²/2)T`.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Total log diffusion `σ√T`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Terminal price for standard normal draw `z`.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * self.diffusion.mul_add(z, self.drift).exp()
    }
}
