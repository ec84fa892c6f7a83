//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the parallel Monte Carlo engine of the workspace:
//! - Per-path random streams keyed by `(seed, path index)`
//! - Exact terminal sampling of geometric Brownian motion
//! - Block-pairwise parallel reduction with a thread-count independent result
//! - Black-Scholes closed form as the reference price
//!
//! Model inputs and the error type come from Layer 1 (`pricer_core`).
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::{MonteCarloConfig, MonteCarloPricer, SimulationParams};
//! use pricer_pricing::analytical::black_scholes_call;
//!
//! let params = SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0);
//! let config = MonteCarloConfig::builder()
//!     .n_paths(200_000)
//!     .seed(1234)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloPricer::new(config)
//!     .unwrap()
//!     .price_european_call(&params)
//!     .unwrap();
//! let reference = black_scholes_call(&params).unwrap();
//!
//! assert!((result.price - reference).abs() < 5.0 * result.std_error);
//! ```
//!
//! ## Determinism
//!
//! For fixed inputs, seed and block size, prices are bit-identical across
//! runs and across rayon pool sizes. Changing the block size may change the
//! last bits of the result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Random number generation
pub mod rng;

// Parallel reduction
pub mod reduce;

// Monte Carlo kernel
pub mod mc;

// Analytical solutions for verification
pub mod analytical;

// Re-export commonly used items for convenience
pub use mc::{run_monte_carlo, MonteCarloConfig, MonteCarloPricer, PricingResult};
pub use pricer_core::types::{PricingError, SimulationParams};
