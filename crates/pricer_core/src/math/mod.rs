//! Mathematical utilities shared across pricing layers.
//!
//! - [`distributions`]: standard normal CDF and PDF

pub mod distributions;
