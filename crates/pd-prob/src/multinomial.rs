//! Multinomial distribution (multivariate, stateless).
//!
//! All parameters arrive with each call, so there is no constructed object:
//! the frequency and probability vectors are re-validated every time.

use pd_core::{Error, Result};

use crate::combinatorics::{ln_factorial, multinomial_coefficient, total};
use crate::math::round_to;

/// Sums farther than this from 1 are accepted only through the rounding check.
const EXACT_SUM_TOLERANCE: f64 = 1e-9;

/// Checks the inputs and returns the total number of trials.
fn validate(frequencies: &[u64], probabilities: &[f64]) -> Result<u64> {
    if frequencies.len() != probabilities.len() {
        return Err(Error::CardinalityMismatch {
            frequencies: frequencies.len(),
            probabilities: probabilities.len(),
        });
    }

    // The sum only has to round to 1 at one decimal place.
    let sum: f64 = probabilities.iter().sum();
    if round_to(sum, 1) != 1.0 {
        return Err(Error::InvalidDistribution(format!(
            "probabilities must add up to 1, got {}",
            sum
        )));
    }
    if (sum - 1.0).abs() > EXACT_SUM_TOLERANCE {
        log::warn!("multinomial probabilities sum to {sum}; accepted after rounding to 1");
    }

    let out_of_range = probabilities.iter().enumerate().find(|(_, p)| !(0.0..=1.0).contains(*p));
    if let Some((i, p)) = out_of_range {
        return Err(Error::InvalidDistribution(format!(
            "probability {} must be in [0,1], got {}",
            i, p
        )));
    }
    total(frequencies)
}

/// Probability mass of observing `frequencies` given per-category `probabilities`.
///
/// ```text
///        n!
/// pmf = ------- p₁ˣ¹⋯pₖˣᵏ      n = x₁ + ⋯ + xₖ
///       x₁!⋯xₖ!
/// ```
///
/// Fails with [`Error::CardinalityMismatch`] when the vectors differ in length,
/// then with [`Error::InvalidDistribution`] when the probabilities do not sum to
/// 1 after rounding to one decimal or one of them lies outside `[0,1]`.
/// A total count past `u64::MAX` is [`Error::InvalidParameters`].
pub fn pmf(frequencies: &[u64], probabilities: &[f64]) -> Result<f64> {
    let n = validate(frequencies, probabilities)?;

    let coefficient = multinomial_coefficient(frequencies)?;
    let product: f64 =
        frequencies.iter().zip(probabilities).map(|(&x, &p)| p.powf(x as f64)).product();
    let direct = coefficient * product;
    if direct.is_normal() && coefficient.is_normal() && product.is_normal() {
        return Ok(direct);
    }
    // A factor left the normal range; same quantity in log space.
    Ok(ln_mass(n, frequencies, probabilities).exp())
}

/// Natural log of [`pmf`], with the same validation.
pub fn ln_pmf(frequencies: &[u64], probabilities: &[f64]) -> Result<f64> {
    let n = validate(frequencies, probabilities)?;
    Ok(ln_mass(n, frequencies, probabilities))
}

fn ln_mass(n: u64, frequencies: &[u64], probabilities: &[f64]) -> f64 {
    frequencies.iter().zip(probabilities).fold(ln_factorial(n), |acc, (&x, &p)| {
        // 0 · ln 0 contributes nothing: a zero-probability category observed zero times.
        let term = if x == 0 { 0.0 } else { x as f64 * p.ln() };
        acc - ln_factorial(x) + term
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        // 3 categories, 6 trials: 6!/(1!2!3!) · 0.2 · 0.3² · 0.5³ = 60 · 0.00225
        let v = pmf(&[1, 2, 3], &[0.2, 0.3, 0.5]).unwrap();
        assert_relative_eq!(v, 0.135, epsilon = 1e-12);

        // Two categories reduce to the binomial: C(4,1) 0.3 · 0.7³
        let v = pmf(&[1, 3], &[0.3, 0.7]).unwrap();
        assert_relative_eq!(v, 4.0 * 0.3 * 0.7f64.powi(3), epsilon = 1e-12);
    }

    #[test]
    fn test_order_independent() {
        let a = pmf(&[1, 2, 3], &[0.2, 0.3, 0.5]).unwrap();
        let b = pmf(&[3, 1, 2], &[0.5, 0.2, 0.3]).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-15);
    }

    #[test]
    fn test_cardinality_mismatch() {
        let err = pmf(&[1, 2, 3], &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, Error::CardinalityMismatch { frequencies: 3, probabilities: 2 }));
    }

    #[test]
    fn test_cardinality_checked_before_sum() {
        let err = pmf(&[1], &[0.3, 0.3]).unwrap_err();
        assert!(matches!(err, Error::CardinalityMismatch { .. }));
    }

    #[test]
    fn test_probabilities_must_sum_to_one() {
        let err = pmf(&[1, 1], &[0.3, 0.3]).unwrap_err();
        assert!(matches!(err, Error::InvalidDistribution(_)));
    }

    #[test]
    fn test_sum_tolerance_is_one_decimal() {
        // 0.95 rounds to 1.0 and passes; 0.94 rounds to 0.9 and fails.
        assert!(pmf(&[1, 1], &[0.5, 0.45]).is_ok());
        assert!(pmf(&[1, 1], &[0.5, 0.44]).is_err());
    }

    #[test]
    fn test_individual_probability_range() {
        let err = pmf(&[1, 1], &[1.2, -0.2]).unwrap_err();
        assert!(matches!(err, Error::InvalidDistribution(_)));
    }

    #[test]
    fn test_zero_probability_zero_count() {
        assert_relative_eq!(pmf(&[2, 0], &[1.0, 0.0]).unwrap(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(ln_pmf(&[2, 0], &[1.0, 0.0]).unwrap(), 0.0, epsilon = 1e-15);
        assert_eq!(pmf(&[1, 1], &[1.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_ln_pmf_matches_pmf() {
        let f = [4, 0, 7, 2];
        let p = [0.1, 0.2, 0.4, 0.3];
        assert_relative_eq!(ln_pmf(&f, &p).unwrap(), pmf(&f, &p).unwrap().ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_total_count_overflow() {
        let err = pmf(&[u64::MAX, 1], &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
        assert!(ln_pmf(&[u64::MAX, 1], &[0.5, 0.5]).is_err());
        // Shape checks still come first.
        let err = pmf(&[u64::MAX, 1], &[0.5]).unwrap_err();
        assert!(matches!(err, Error::CardinalityMismatch { .. }));
    }

    #[test]
    fn test_underflowing_product_is_not_rounded_to_zero() {
        // 0.5^1100 underflows while the mass itself is representable.
        let f = [20, 1080];
        let p = [0.5, 0.5];
        let v = pmf(&f, &p).unwrap();
        assert!(v > 0.0);
        assert_relative_eq!(v.ln(), ln_pmf(&f, &p).unwrap(), max_relative = 1e-9);
    }

    #[test]
    fn test_large_counts_use_log_space() {
        let v = pmf(&[100, 100], &[0.5, 0.5]).unwrap();
        let expected = (ln_factorial(200) - 2.0 * ln_factorial(100) + 200.0 * 0.5f64.ln()).exp();
        assert_relative_eq!(v, expected, max_relative = 1e-9);
    }
}
