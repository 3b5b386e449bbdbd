//! Small numerically-stable helpers shared by the distribution modules.

use statrs::function::erf::{erf_inv, erfc};

/// Natural log of `sqrt(2π)`.
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Stable sigmoid: `1 / (1 + exp(-x))`.
///
/// Single `exp(-|x|)`, so neither tail overflows.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    let e = (-x.abs()).exp();
    let recip = 1.0 / (1.0 + e);
    if x >= 0.0 { recip } else { e * recip }
}

/// Stable `log(sigmoid(x))`.
#[inline]
pub fn log_sigmoid(x: f64) -> f64 {
    // log(sigmoid(x)) = -log(1 + exp(-x))
    if x >= 0.0 { -(-x).exp().ln_1p() } else { x - x.exp().ln_1p() }
}

/// Log-density of the standard normal at `z`.
#[inline]
pub fn standard_normal_ln_pdf(z: f64) -> f64 {
    -0.5 * z * z - LN_SQRT_2PI
}

/// `Φ(z)`, the standard normal cdf.
///
/// Evaluated as `erfc(-z/√2)/2`, which keeps relative accuracy in the lower tail.
#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// `Φ⁻¹(p)` for `p ∈ [0,1]`; the endpoints map to `∓∞`.
pub fn standard_normal_inverse(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    std::f64::consts::SQRT_2 * erf_inv(2.0 * p - 1.0)
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
