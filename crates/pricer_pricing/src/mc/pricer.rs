//! Monte Carlo pricing engine.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Parameter and configuration validation
//! 2. Per-path payoff sampling (via [`PathSampler`](super::sampler::PathSampler))
//! 3. Block-pairwise reduction (via [`PairwiseReducer`])
//! 4. A single division by N and a single discount multiplication
//!
//! [`run_monte_carlo`] wraps the whole run behind a flat argument list and an
//! out parameter.

use std::time::Instant;

use pricer_core::types::{PricingError, SimulationParams};
use tracing::{debug, info_span, warn};

use super::config::MonteCarloConfig;
use super::sampler::PathSampler;
use crate::reduce::{Moments, PairwiseReducer};

/// Pricing result of one Monte Carlo run.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 15.04,
///     std_error: 0.004,
///     n_paths: 1 << 24,
///     seed: 1234,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate, discounted.
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Run seed.
    pub seed: u64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricer for European calls under GBM.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(1234)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0);
/// let result = pricer.price_european_call(&params).unwrap();
///
/// assert!(result.price > 0.0);
/// assert!(result.std_error > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    reducer: PairwiseReducer,
}

impl MonteCarloPricer {
    /// Creates a pricer from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;
        let reducer = PairwiseReducer::new(config.block_size())?;
        Ok(Self { config, reducer })
    }

    /// Creates a pricer from a configuration with the seed replaced.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloPricer::new`].
    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Result<Self, PricingError> {
        Self::new(config.with_seed(seed))
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Samples every path and reduces the undiscounted payoffs.
    ///
    /// The returned aggregate is raw: NaN or infinite payoffs are visible in
    /// it and are not reported as an error here.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidParameter`] if `params` fails validation. No
    ///   path is sampled in that case.
    /// - [`PricingError::NumericAnomaly`] with stage `"path_count"` if the
    ///   reducer consumed a number of contributions other than N.
    pub fn simulate(&self, params: &SimulationParams) -> Result<Moments, PricingError> {
        let sampler = PathSampler::new(params, &self.config)?;

        let span = info_span!(
            "monte_carlo",
            n_paths = self.config.n_paths(),
            seed = self.config.seed(),
            block_size = self.config.block_size(),
            normal = %self.config.normal_method()
        );
        let _enter = span.enter();

        let started = Instant::now();
        let moments = self.reducer.reduce(&sampler)?;
        let elapsed = started.elapsed();
        ensure_path_count(&moments, self.config.n_paths())?;

        let secs = elapsed.as_secs_f64();
        let paths_per_sec = if secs > 0.0 {
            moments.count() as f64 / secs
        } else {
            f64::INFINITY
        };
        debug!(elapsed_ms = secs * 1e3, paths_per_sec, "simulation complete");

        Ok(moments)
    }

    /// Prices a European call: `discount × (Σ payoffs) / N`.
    ///
    /// The standard error is `discount × sqrt(m2 / (N − 1)) / sqrt(N)`,
    /// and zero when `N = 1`. It is infinite, not an error, when squared
    /// deviations overflow while the payoff sum stays finite.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidParameter`] if `params` fails validation.
    /// - [`PricingError::NumericAnomaly`] if the reduced payoff sum is NaN or
    ///   infinite.
    pub fn price_european_call(
        &self,
        params: &SimulationParams,
    ) -> Result<PricingResult, PricingError> {
        let moments = self.simulate(params)?;

        if !moments.is_finite() {
            warn!(sum = moments.sum(), "non-finite payoff aggregate");
            return Err(PricingError::NumericAnomaly {
                stage: "reduction",
                value: moments.sum(),
            });
        }

        let std_error = params.discount * moments.std_error();
        if !std_error.is_finite() {
            warn!(m2 = moments.m2(), "second moment overflowed, standard error unavailable");
        }

        let n = moments.count() as f64;
        Ok(PricingResult {
            price: params.discount * (moments.sum() / n),
            std_error,
            n_paths: moments.count(),
            seed: self.config.seed(),
        })
    }
}

fn ensure_path_count(moments: &Moments, n_paths: usize) -> Result<(), PricingError> {
    if moments.count() == n_paths {
        Ok(())
    } else {
        warn!(count = moments.count(), n_paths, "reduced contribution count mismatch");
        Err(PricingError::NumericAnomaly {
            stage: "path_count",
            value: moments.count() as f64,
        })
    }
}

/// Runs one Monte Carlo valuation and writes the price into `option_price`.
///
/// Uses the Ziggurat transform and the default block size. `discount` is
/// applied as given; it is not recomputed from `rate` and `maturity`.
///
/// `option_price` is written only on success and is left untouched when an
/// error is returned.
///
/// # Errors
///
/// - [`PricingError::InvalidParameter`] when `n_paths <= 0` or any model input
///   is invalid. Validation happens before any path is sampled.
/// - [`PricingError::NumericAnomaly`] when the aggregate is not finite.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::run_monte_carlo;
///
/// let (rate, maturity): (f64, f64) = (0.01, 2.0 / 12.0);
/// let discount = (-rate * maturity).exp();
///
/// let mut price = f64::NAN;
/// run_monte_carlo(106.162, 95.0, rate, 0.5, maturity, 100_000, 1234, discount, &mut price)
///     .unwrap();
/// assert!(price > 14.5 && price < 15.6);
///
/// let mut untouched = -1.0;
/// assert!(run_monte_carlo(106.162, 95.0, rate, 0.5, maturity, 0, 1234, discount, &mut untouched)
///     .is_err());
/// assert_eq!(untouched, -1.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn run_monte_carlo(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_paths: i64,
    seed: u64,
    discount: f64,
    option_price: &mut f64,
) -> Result<(), PricingError> {
    if n_paths <= 0 {
        return Err(PricingError::invalid(
            "n_paths",
            format!("must be positive, got {}", n_paths),
        ));
    }
    let n_paths = usize::try_from(n_paths).map_err(|_| {
        PricingError::invalid(
            "n_paths",
            format!("{} does not fit in the address space", n_paths),
        )
    })?;

    let params =
        SimulationParams::new(spot, strike, rate, volatility, maturity).with_discount(discount);
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .seed(seed)
        .build()?;

    let result = MonteCarloPricer::new(config)?.price_european_call(&params)?;
    *option_price = result.price;
    Ok(())
}
