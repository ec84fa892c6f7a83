//! European call payoff.

/// Undiscounted European call payoff `max(S_T − K, 0)`.
///
/// A NaN terminal price yields NaN rather than 0, so upstream anomalies
/// reach the reducer instead of being clamped away (`f64::max` would drop
/// the NaN).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::call_payoff;
///
/// assert_eq!(call_payoff(110.0, 100.0), 10.0);
/// assert_eq!(call_payoff(90.0, 100.0), 0.0);
/// assert!(call_payoff(f64::NAN, 100.0).is_nan());
/// ```
#[inline]
pub fn call_payoff(terminal: f64, strike: f64) -> f64 {
    let intrinsic = terminal - strike;
    if intrinsic <= 0.0 {
        0.0
    } else {
        intrinsic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_the_money() {
        assert_eq!(call_payoff(120.5, 95.0), 25.5);
    }

    #[test]
    fn test_out_of_and_at_the_money() {
        assert_eq!(call_payoff(80.0, 95.0), 0.0);
        assert_eq!(call_payoff(95.0, 95.0), 0.0);
    }

    #[test]
    fn test_never_negative() {
        for terminal in [0.0, 1e-300, 50.0, 94.999_999] {
            assert!(call_payoff(terminal, 95.0) >= 0.0);
        }
    }

    #[test]
    fn test_non_finite_terminal_propagates() {
        assert!(call_payoff(f64::NAN, 95.0).is_nan());
        assert_eq!(call_payoff(f64::INFINITY, 95.0), f64::INFINITY);
    }

    #[test]
    fn test_monotone_in_strike() {
        let terminal = 101.3;
        let strikes = [80.0, 90.0, 100.0, 101.3, 110.0];
        for pair in strikes.windows(2) {
            assert!(call_payoff(terminal, pair[0]) >= call_payoff(terminal, pair[1]));
        }
    }
}
