//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` so single-precision inputs can be checked
//! against the same closed forms as double-precision ones.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the tail probability underflows in double precision.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational approximation and the continued fraction.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

#[inline]
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) with Hart's double-precision algorithm
/// as published by West (2005), "Better approximations to cumulative normal
/// functions": a rational approximation for |x| < 7.07 and a continued fraction
/// in the tail. Absolute error is below 1e-14 across the real line.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746_068_543).abs() < 1e-14);
/// assert!(norm_cdf(-40.0_f64) == 0.0);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let abs_x = x.abs();

    let tail = if abs_x > lit(TAIL_CUTOFF) {
        zero
    } else {
        let exponential = (-abs_x * abs_x * lit(0.5)).exp();

        if abs_x < lit(RATIONAL_LIMIT) {
            let mut num = lit::<T>(3.526_249_659_989_11e-2) * abs_x + lit(0.700_383_064_443_688);
            num = num * abs_x + lit(6.373_962_203_531_65);
            num = num * abs_x + lit(33.912_866_078_383);
            num = num * abs_x + lit(112.079_291_497_871);
            num = num * abs_x + lit(221.213_596_169_931);
            num = num * abs_x + lit(220.206_867_912_376);

            let mut den = lit::<T>(8.838_834_764_831_84e-2) * abs_x + lit(1.755_667_163_182_64);
            den = den * abs_x + lit(16.064_177_579_207);
            den = den * abs_x + lit(86.780_732_202_946_1);
            den = den * abs_x + lit(296.564_248_779_674);
            den = den * abs_x + lit(637.333_633_378_831);
            den = den * abs_x + lit(793.826_512_519_948);
            den = den * abs_x + lit(440.413_735_824_752);

            exponential * num / den
        } else {
            let mut frac = abs_x + lit(0.65);
            frac = abs_x + lit::<T>(4.0) / frac;
            frac = abs_x + lit::<T>(3.0) / frac;
            frac = abs_x + lit::<T>(2.0) / frac;
            frac = abs_x + one / frac;
            exponential / frac / lit(SQRT_2PI)
        }
    };

    if x > zero {
        one - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-x * x * lit(0.5)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_542_9, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158_655_253_931_457_05, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.977_249_868_051_820_8, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022_750_131_948_179_195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.998_650_101_968_369_9, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_far_tail() {
        // Continued-fraction branch
        let p = norm_cdf(-8.0_f64);
        assert_relative_eq!(p, 6.220_960_574_271_785e-16, max_relative = 1e-7);
        assert_eq!(norm_cdf(-38.0_f64), 0.0);
        assert_eq!(norm_cdf(38.0_f64), 1.0);
    }

    #[test]
    fn test_norm_cdf_single_precision() {
        assert!((norm_cdf(1.0_f32) - 0.841_344_7_f32).abs() < 1e-6);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-1.0_f64), norm_pdf(1.0_f64), epsilon = 1e-15);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_norm_cdf_symmetry(x in -10.0f64..10.0f64) {
                let sum = norm_cdf(x) + norm_cdf(-x);
                prop_assert!((sum - 1.0).abs() < 1e-14);
            }

            #[test]
            fn test_norm_cdf_monotone(x in -10.0f64..10.0f64, dx in 0.0f64..1.0f64) {
                prop_assert!(norm_cdf(x + dx) >= norm_cdf(x) - 1e-15);
            }

            #[test]
            fn test_norm_cdf_bounded(x in -50.0f64..50.0f64) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
