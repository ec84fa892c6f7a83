//! Index-addressable contribution sources.

/// A fixed-length sequence of per-path contributions.
///
/// This is the data contract between the sampler and the reducer. A source is
/// read by index from many threads at once, so `contribution` must be a pure
/// function of `index`: evaluating the same index twice, or in any order,
/// yields the same value.
///
/// Materialised slices implement it directly, which lets the reducer be
/// exercised with synthetic data.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::reduce::ContributionSource;
///
/// let values = vec![1.0, 2.0, 3.0];
/// assert_eq!(values.len(), 3);
/// assert_eq!(values.contribution(1), 2.0);
/// ```
pub trait ContributionSource: Sync {
    /// Number of contributions.
    fn len(&self) -> usize;

    /// Contribution at `index`, for `index < len()`.
    fn contribution(&self, index: usize) -> f64;

    /// Returns `true` when the source holds no contributions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContributionSource for [f64] {
    #[inline]
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    #[inline]
    fn contribution(&self, index: usize) -> f64 {
        self[index]
    }
}

impl ContributionSource for Vec<f64> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn contribution(&self, index: usize) -> f64 {
        self[index]
    }
}
