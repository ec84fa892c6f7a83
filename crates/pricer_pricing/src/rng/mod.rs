//! # Random Number Generation Infrastructure
//!
//! Random number generation for the Monte Carlo sampler.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: results depend only on (seed, path index, transform)
//! - **Independence**: one ChaCha8 stream per path; no generator state is shared
//!   between paths, so any evaluation order or thread count yields the same draws
//! - **Static dispatch**: the normal transform is an enum, not a trait object
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: single-path generator with uniform and normal draws
//! - [`PathStreams`]: per-run factory handing out one generator per path
//! - [`NormalMethod`]: Ziggurat (default) or Box–Muller
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalMethod, PathStreams};
//!
//! let streams = PathStreams::new(1234);
//! let z0 = streams.stream(0).gen_normal(NormalMethod::Ziggurat);
//! let z1 = streams.stream(1).gen_normal(NormalMethod::Ziggurat);
//! assert_ne!(z0, z1);
//! ```

mod prng;

// Public re-exports
pub use prng::{NormalMethod, PathStreams, PricerRng};

#[cfg(test)]
mod tests;
