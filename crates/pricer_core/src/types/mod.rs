//! Core simulation and error types.
//!
//! This module provides:
//! - `params`: Immutable model inputs for a single pricing run
//! - `error`: Structured error types shared by the sampler, reducer and orchestration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SimulationParams`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use params::SimulationParams;
