//! Analytical (closed-form) solutions for option pricing.
//!
//! These serve as reference values for the Monte Carlo engine.
//!
//! # Available Solutions
//!
//! - **European Call**: Black-Scholes (1973) closed form, in forward form
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::SimulationParams;
//! use pricer_pricing::analytical::black_scholes_call;
//!
//! let params = SimulationParams::new(100.0, 100.0, 0.05, 0.2, 1.0);
//! let price = black_scholes_call(&params).unwrap();
//! assert!((price - 10.4506).abs() < 1e-4);
//! ```

pub mod european;

pub use european::{black_scholes_call, d1_d2};
