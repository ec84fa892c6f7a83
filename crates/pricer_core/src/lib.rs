//! # pricer_core: Foundation Types for the Monte Carlo Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Simulation parameters for a European call under GBM (`types::params`)
//! - Error taxonomy shared by every layer: `PricingError` (`types::error`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{PricingError, SimulationParams};
//!
//! let params = SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0);
//! assert!(params.validate().is_ok());
//!
//! let bad = SimulationParams::new(0.0, 95.0, 0.01, 0.5, 1.0);
//! assert!(matches!(
//!     bad.validate(),
//!     Err(PricingError::InvalidParameter { name: "spot", .. })
//! ));
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SimulationParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
