//! Monte Carlo pricing of European calls under geometric Brownian motion.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (n_paths, seed, block size, normal transform)
//! ├── PathSampler        (path index → payoff, ContributionSource)
//! │   ├── PathStreams    (one ChaCha stream per path)
//! │   ├── GbmTerminal    (Z → S(T), exact single step)
//! │   └── call_payoff    (S(T) → max(S(T) − K, 0))
//! └── PairwiseReducer    (payoffs → Moments)
//! ```
//!
//! Each path is independent and touches no shared mutable state, so the
//! sampler is read concurrently by the reducer's worker threads. The price
//! is formed once, after reduction: `discount × sum / N`.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::SimulationParams;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::rng::NormalMethod;
//!
//! let params = SimulationParams::new(100.0, 100.0, 0.05, 0.2, 1.0);
//! let config = MonteCarloConfig::builder()
//!     .n_paths(100_000)
//!     .seed(42)
//!     .normal_method(NormalMethod::BoxMuller)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config).unwrap();
//! let result = pricer.price_european_call(&params).unwrap();
//!
//! // Black-Scholes reference is 10.4506
//! assert!((result.price - 10.4506).abs() < 5.0 * result.std_error);
//! ```

mod config;
mod paths;
mod payoff;
mod pricer;
mod sampler;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SEED};
pub use paths::GbmTerminal;
pub use payoff::call_payoff;
pub use pricer::{run_monte_carlo, MonteCarloPricer, PricingResult};
pub use sampler::PathSampler;
