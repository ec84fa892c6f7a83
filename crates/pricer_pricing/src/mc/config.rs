//! Monte Carlo simulation configuration.
//!
//! This module provides the engine-side configuration (path count, seed,
//! reduction block size and normal transform) and its builder. Model inputs
//! live in [`SimulationParams`](pricer_core::types::SimulationParams).

use pricer_core::types::PricingError;

use crate::reduce::DEFAULT_BLOCK_SIZE;
use crate::rng::NormalMethod;

/// Seed used when the builder is not given one.
pub const DEFAULT_SEED: u64 = 0;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
/// use pricer_pricing::rng::NormalMethod;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(1 << 20)
///     .seed(1234)
///     .normal_method(NormalMethod::BoxMuller)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 1 << 20);
/// assert_eq!(config.seed(), 1234);
/// assert_eq!(config.block_size(), 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Seed keying every per-path stream.
    seed: u64,
    /// Contributions accumulated per leaf of the reduction tree.
    block_size: usize,
    /// Uniform-to-normal transform.
    normal_method: NormalMethod,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the run seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the reduction block size.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the normal transform.
    #[inline]
    pub fn normal_method(&self) -> NormalMethod {
        self.normal_method
    }

    /// Returns a copy with a different seed.
    #[inline]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `n_paths` or `block_size` is 0.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 {
            return Err(PricingError::invalid("n_paths", "must be positive, got 0"));
        }
        if self.block_size == 0 {
            return Err(PricingError::invalid("block_size", "must be positive, got 0"));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    block_size: Option<usize>,
    normal_method: NormalMethod,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths (must be positive).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the run seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the reduction block size (must be positive).
    #[inline]
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Sets the normal transform.
    #[inline]
    pub fn normal_method(mut self, normal_method: NormalMethod) -> Self {
        self.normal_method = normal_method;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `n_paths` is missing or zero,
    /// or if `block_size` is zero.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid("n_paths", "must be specified"))?;

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            block_size: self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE),
            normal_method: self.normal_method,
        };

        config.validate()?;
        Ok(config)
    }
}
