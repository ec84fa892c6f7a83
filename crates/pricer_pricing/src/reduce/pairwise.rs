//! Block-pairwise parallel reduction.

use pricer_core::types::PricingError;

use super::moments::Moments;
use super::source::ContributionSource;

/// Default number of contributions accumulated locally per block.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Tree-shaped parallel reducer.
///
/// Indices `0..len` are cut into consecutive blocks of `block_size` (the last
/// block may be short). Each block is accumulated sequentially into a
/// [`Moments`]; block results are then combined by recursive halving of the
/// block range, with the two halves evaluated through `rayon::join`.
///
/// Split points depend only on `len` and `block_size`, never on the thread
/// pool, so the result is bit-identical across runs and across pool sizes for
/// a fixed block size. Rounding error grows with `block_size` inside a leaf and
/// with `log2(len / block_size)` across the tree.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::reduce::PairwiseReducer;
///
/// let reducer = PairwiseReducer::new(4).unwrap();
/// let values: Vec<f64> = (1..=10).map(f64::from).collect();
///
/// let moments = reducer.reduce(&values).unwrap();
/// assert_eq!(moments.count(), 10);
/// assert_eq!(moments.sum(), 55.0);
///
/// let empty: Vec<f64> = Vec::new();
/// assert!(reducer.reduce(&empty).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairwiseReducer {
    block_size: usize,
}

impl Default for PairwiseReducer {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl PairwiseReducer {
    /// Creates a reducer with the given leaf block size.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when `block_size` is zero.
    pub fn new(block_size: usize) -> Result<Self, PricingError> {
        if block_size == 0 {
            return Err(PricingError::invalid("block_size", "must be positive, got 0"));
        }
        Ok(Self { block_size })
    }

    /// Returns the leaf block size.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of leaf blocks used for `len` contributions.
    #[inline]
    pub fn block_count(&self, len: usize) -> usize {
        len.div_ceil(self.block_size)
    }

    /// Reduces every contribution of `source` into one [`Moments`].
    ///
    /// Blocks until the whole tree has resolved. NaN and infinite contributions
    /// propagate into the returned aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for an empty source.
    pub fn reduce<S>(&self, source: &S) -> Result<Moments, PricingError>
    where
        S: ContributionSource + ?Sized,
    {
        let len = source.len();
        if len == 0 {
            return Err(PricingError::invalid(
                "n_paths",
                "cannot reduce zero contributions",
            ));
        }

        Ok(self.reduce_blocks(source, 0, self.block_count(len), len))
    }

    /// Convenience wrapper returning only the tree-summed total.
    ///
    /// # Errors
    ///
    /// Same as [`PairwiseReducer::reduce`].
    pub fn sum<S>(&self, source: &S) -> Result<f64, PricingError>
    where
        S: ContributionSource + ?Sized,
    {
        self.reduce(source).map(|moments| moments.sum())
    }

    fn reduce_blocks<S>(&self, source: &S, first: usize, last: usize, len: usize) -> Moments
    where
        S: ContributionSource + ?Sized,
    {
        if last - first == 1 {
            return self.reduce_block(source, first, len);
        }

        let mid = first + (last - first) / 2;
        let (left, right) = rayon::join(
            || self.reduce_blocks(source, first, mid, len),
            || self.reduce_blocks(source, mid, last, len),
        );
        left.merge(&right)
    }

    #[inline]
    fn reduce_block<S>(&self, source: &S, block: usize, len: usize) -> Moments
    where
        S: ContributionSource + ?Sized,
    {
        let start = block * self.block_size;
        let end = (start + self.block_size).min(len);

        let mut acc = Moments::new();
        for index in start..end {
            acc.push(source.contribution(index));
        }
        acc
    }
}
