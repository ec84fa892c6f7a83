//! Per-path pseudo-random streams for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded ChaCha8 generator bound to one
//! path, and [`PathStreams`], which hands out one such generator per path index.
//!
//! # Stream Derivation
//!
//! A run seed keys the ChaCha8 cipher (via `SeedableRng::seed_from_u64`); the
//! path index selects the ChaCha *stream*. Every (seed, index) pair therefore
//! reads its own keystream, with no state shared between paths and no
//! dependence on the order in which paths are evaluated.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Transform from uniform to standard normal variates.
///
/// The choice is part of the reproducibility contract: the same seed yields
/// different draws under different transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NormalMethod {
    /// ZIGNOR Ziggurat via `rand_distr::StandardNormal`.
    ///
    /// Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
    /// Generating Random Variables". Journal of Statistical Software.
    #[default]
    Ziggurat,

    /// Box–Muller, cosine branch only.
    ///
    /// Consumes exactly two uniforms per variate:
    /// `Z = sqrt(-2 ln u1) * cos(2π u2)` with `u1 ∈ (0, 1]`, `u2 ∈ [0, 1)`.
    BoxMuller,
}

impl NormalMethod {
    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalMethod::Ziggurat => "ziggurat",
            NormalMethod::BoxMuller => "box-muller",
        }
    }
}

impl fmt::Display for NormalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ziggurat" => Ok(NormalMethod::Ziggurat),
            "box-muller" | "box_muller" | "boxmuller" => Ok(NormalMethod::BoxMuller),
            other => Err(PricingError::invalid(
                "normal_method",
                format!("unknown transform '{}', expected ziggurat or box-muller", other),
            )),
        }
    }
}

/// Monte Carlo random number generator for a single path.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{NormalMethod, PricerRng};
///
/// let mut a = PricerRng::for_path(1234, 7);
/// let mut b = PricerRng::for_path(1234, 7);
/// assert_eq!(
///     a.gen_normal(NormalMethod::Ziggurat),
///     b.gen_normal(NormalMethod::Ziggurat)
/// );
///
/// let u = a.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PricerRng {
    /// Creates a generator on stream 0 of `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the generator for path `path_index` under `seed`.
    ///
    /// Equivalent to `PathStreams::new(seed).stream(path_index)`.
    #[inline]
    pub fn for_path(seed: u64, path_index: u64) -> Self {
        let mut rng = Self::from_seed(seed);
        rng.inner.set_stream(path_index);
        rng
    }

    /// Returns the run seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the ChaCha stream id (the path index).
    #[inline]
    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }

    /// Generates a uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a standard normal variate with the chosen transform.
    #[inline]
    pub fn gen_normal(&mut self, method: NormalMethod) -> f64 {
        match method {
            NormalMethod::Ziggurat => StandardNormal.sample(&mut self.inner),
            NormalMethod::BoxMuller => {
                // 1 - U[0,1) lies in (0, 1], so ln never sees zero
                let u1 = 1.0 - self.gen_uniform();
                let u2 = self.gen_uniform();
                (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
            }
        }
    }

    /// Fills the buffer with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64], method: NormalMethod) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal(method);
        }
    }
}

/// Factory for per-path generators under one run seed.
///
/// The ChaCha key schedule is computed once; each [`PathStreams::stream`] call
/// clones the keyed state and selects the path's stream.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{PathStreams, PricerRng};
///
/// let streams = PathStreams::new(42);
/// let mut from_factory = streams.stream(3);
/// let mut direct = PricerRng::for_path(42, 3);
/// assert_eq!(from_factory.gen_uniform(), direct.gen_uniform());
/// ```
#[derive(Clone, Debug)]
pub struct PathStreams {
    base: PricerRng,
}

impl PathStreams {
    /// Keys the factory with the run seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            base: PricerRng::from_seed(seed),
        }
    }

    /// Returns the run seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.base.seed
    }

    /// Returns a fresh generator for `path_index`.
    #[inline]
    pub fn stream(&self, path_index: u64) -> PricerRng {
        let mut rng = self.base.clone();
        rng.inner.set_stream(path_index);
        rng
    }
}
