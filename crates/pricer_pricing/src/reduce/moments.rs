//! Mergeable first and second moment accumulator.

/// Running count, sum, mean and centred second moment of a set of values.
///
/// `push` applies Welford's update; `merge` applies the pairwise combination
/// of Chan, Golub & LeVeque (1979). The plain `sum` is carried alongside so the
/// price estimate comes from the tree-summed total rather than the running
/// mean.
///
/// Non-finite inputs are never filtered: a NaN or infinite value poisons
/// `sum` (and `m2`) in every partial result above it. `m2` alone can also
/// overflow for finite values above roughly `1e154`, which leaves `sum`
/// usable while the standard error becomes infinite.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::reduce::Moments;
///
/// let mut left = Moments::new();
/// left.push(1.0);
/// left.push(2.0);
/// let mut right = Moments::new();
/// right.push(3.0);
///
/// let total = left.merge(&right);
/// assert_eq!(total.count(), 3);
/// assert_eq!(total.sum(), 6.0);
/// assert!((total.variance() - 1.0).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    count: usize,
    sum: f64,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one value.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Combines two disjoint partial results.
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        if self.count == 0 {
            return *other;
        }
        if other.count == 0 {
            return *self;
        }

        let count = self.count + other.count;
        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = count as f64;
        let delta = other.mean - self.mean;

        Self {
            count,
            sum: self.sum + other.sum,
            mean: self.mean + delta * (n_b / n),
            m2: self.m2 + other.m2 + delta * delta * (n_a * n_b / n),
        }
    }

    /// Number of values accumulated.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of the values.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Running mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of squared deviations from the mean.
    #[inline]
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Unbiased sample variance; zero for fewer than two values.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Standard error of the mean, `sqrt(variance / count)`; zero when empty.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as f64).sqrt()
        }
    }

    /// `true` when the sum carries neither NaN nor ±inf.
    ///
    /// The second moment is not consulted; see [`Moments::std_error`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.sum.is_finite()
    }
}

impl Extend<f64> for Moments {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = Self::new();
        moments.extend(iter);
        moments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty() {
        let m = Moments::new();
        assert_eq!(m.count(), 0);
        assert_eq!(m.sum(), 0.0);
        assert_eq!(m.variance(), 0.0);
        assert_eq!(m.std_error(), 0.0);
        assert!(m.is_finite());
    }

    #[test]
    fn test_single_value_has_zero_variance() {
        let m: Moments = [4.5].into_iter().collect();
        assert_eq!(m.count(), 1);
        assert_eq!(m.mean(), 4.5);
        assert_eq!(m.variance(), 0.0);
    }

    #[test]
    fn test_known_variance() {
        let m: Moments = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_eq!(m.sum(), 40.0);
        assert_relative_eq!(m.mean(), 5.0, epsilon = 1e-15);
        assert_relative_eq!(m.m2(), 32.0, epsilon = 1e-12);
        assert_relative_eq!(m.variance(), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let values: Vec<f64> = (0..1000).map(|i| ((i * 37) % 101) as f64 * 0.25).collect();
        let sequential: Moments = values.iter().copied().collect();

        let (left, right) = values.split_at(377);
        let a: Moments = left.iter().copied().collect();
        let b: Moments = right.iter().copied().collect();
        let merged = a.merge(&b);

        assert_eq!(merged.count(), sequential.count());
        assert_relative_eq!(merged.sum(), sequential.sum(), max_relative = 1e-13);
        assert_relative_eq!(merged.mean(), sequential.mean(), max_relative = 1e-13);
        assert_relative_eq!(merged.m2(), sequential.m2(), max_relative = 1e-11);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let a: Moments = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(a.merge(&Moments::new()), a);
        assert_eq!(Moments::new().merge(&a), a);
    }

    #[test]
    fn test_constant_values_have_exactly_zero_m2() {
        let a: Moments = std::iter::repeat(11.25).take(100).collect();
        let b: Moments = std::iter::repeat(11.25).take(57).collect();
        let merged = a.merge(&b);
        assert_eq!(merged.m2(), 0.0);
        assert_eq!(merged.std_error(), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let a: Moments = [1.0, f64::NAN, 2.0].into_iter().collect();
        let b: Moments = [3.0].into_iter().collect();
        let merged = a.merge(&b);
        assert!(merged.sum().is_nan());
        assert!(!merged.is_finite());
    }

    #[test]
    fn test_overflowing_m2_keeps_sum_finite() {
        let m: Moments = [1e160, 3e160, 2e160].into_iter().collect();
        assert_relative_eq!(m.sum(), 6e160, max_relative = 1e-15);
        assert!(m.m2().is_infinite());
        assert!(m.std_error().is_infinite());
        assert!(m.is_finite());
    }

    #[test]
    fn test_infinity_propagates() {
        let a: Moments = [1.0, f64::INFINITY].into_iter().collect();
        let b: Moments = [3.0].into_iter().collect();
        let merged = b.merge(&a);
        assert_eq!(merged.sum(), f64::INFINITY);
        assert!(!merged.is_finite());
    }
}
