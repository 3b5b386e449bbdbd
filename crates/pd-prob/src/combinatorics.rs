//! Factorials and binomial/multinomial coefficients.

use pd_core::{Error, Result};
use statrs::function::factorial;

/// `n!` as `f64`. Exact for `n <= 170`; `+∞` beyond.
#[inline]
pub fn factorial(n: u64) -> f64 {
    factorial::factorial(n)
}

/// `ln(n!)`, finite for every `n`.
#[inline]
pub fn ln_factorial(n: u64) -> f64 {
    factorial::ln_factorial(n)
}

/// `C(n, k)`; zero when `k > n`.
#[inline]
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    factorial::binomial(n, k)
}

/// `ln C(n, k)` for `k <= n`.
#[inline]
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// `Σ xᵢ`, or [`Error::InvalidParameters`] when it does not fit in a `u64`.
pub fn total(counts: &[u64]) -> Result<u64> {
    counts.iter().try_fold(0u64, |acc, &x| acc.checked_add(x)).ok_or_else(|| {
        Error::InvalidParameters(format!("total count of {:?} overflows u64", counts))
    })
}

/// `n! / (x₁!⋯x_k!)` with `n = Σ xᵢ`.
///
/// Falls back to log space when `n!` overflows.
pub fn multinomial_coefficient(counts: &[u64]) -> Result<f64> {
    let n = total(counts)?;
    let direct = factorial(n) / counts.iter().map(|&x| factorial(x)).product::<f64>();
    if direct.is_finite() {
        return Ok(direct);
    }
    ln_multinomial_coefficient(counts).map(f64::exp)
}

/// `ln(n! / (x₁!⋯x_k!))`.
pub fn ln_multinomial_coefficient(counts: &[u64]) -> Result<f64> {
    let n = total(counts)?;
    Ok(ln_factorial(n) - counts.iter().map(|&x| ln_factorial(x)).sum::<f64>())
}
