//! Per-path sampling of discountable call payoffs.

use pricer_core::types::{PricingError, SimulationParams};
use rayon::prelude::*;

use super::config::MonteCarloConfig;
use super::paths::GbmTerminal;
use super::payoff::call_payoff;
use crate::reduce::ContributionSource;
use crate::rng::{NormalMethod, PathStreams};

/// Maps path indices to undiscounted call payoffs.
///
/// Path `i` draws its normal from its own ChaCha stream (`stream = i`) under
/// the run seed, so a contribution depends only on `(seed, i, params)` and
/// not on evaluation order.
///
/// The sampler is a [`ContributionSource`]: the reducer pulls payoffs by
/// index without materialising them. [`PathSampler::sample_into`] fills a
/// buffer with the same values for callers that want them all.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::mc::{MonteCarloConfig, PathSampler};
/// use pricer_pricing::reduce::ContributionSource;
///
/// let params = SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0);
/// let config = MonteCarloConfig::builder().n_paths(8).seed(1234).build().unwrap();
/// let sampler = PathSampler::new(&params, &config).unwrap();
///
/// let mut payoffs = vec![0.0; 8];
/// sampler.sample_into(&mut payoffs).unwrap();
///
/// assert_eq!(payoffs[5], sampler.contribution(5));
/// assert!(payoffs.iter().all(|p| *p >= 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct PathSampler {
    gbm: GbmTerminal,
    strike: f64,
    streams: PathStreams,
    normal_method: NormalMethod,
    n_paths: usize,
}

impl PathSampler {
    /// Creates a sampler for validated model parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `params` or `config`
    /// fails validation.
    pub fn new(params: &SimulationParams, config: &MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;
        params.validate()?;

        Ok(Self {
            gbm: GbmTerminal::from_params(params),
            strike: params.strike,
            streams: PathStreams::new(config.seed()),
            normal_method: config.normal_method(),
            n_paths: config.n_paths(),
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Run seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.streams.seed()
    }

    /// Standard normal draw for `path_index`.
    #[inline]
    pub fn normal(&self, path_index: usize) -> f64 {
        self.streams
            .stream(path_index as u64)
            .gen_normal(self.normal_method)
    }

    /// Terminal asset price for `path_index`.
    #[inline]
    pub fn terminal_price(&self, path_index: usize) -> f64 {
        self.gbm.terminal_price(self.normal(path_index))
    }

    /// Undiscounted call payoff for `path_index`.
    #[inline]
    pub fn payoff(&self, path_index: usize) -> f64 {
        call_payoff(self.terminal_price(path_index), self.strike)
    }

    /// Writes the payoff of every path into `out`, in parallel.
    ///
    /// `out[i]` equals [`PathSampler::payoff`]`(i)` regardless of how the
    /// work is scheduled.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `out.len()` differs from
    /// the path count.
    pub fn sample_into(&self, out: &mut [f64]) -> Result<(), PricingError> {
        if out.len() != self.n_paths {
            return Err(PricingError::invalid(
                "out",
                format!(
                    "buffer holds {} slots but the run has {} paths",
                    out.len(),
                    self.n_paths
                ),
            ));
        }

        out.par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| *slot = self.payoff(index));
        Ok(())
    }
}

impl ContributionSource for PathSampler {
    #[inline]
    fn len(&self) -> usize {
        self.n_paths
    }

    #[inline]
    fn contribution(&self, index: usize) -> f64 {
        self.payoff(index)
    }
}
