//! Weibull distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};
use statrs::function::gamma::gamma;

/// Weibull distribution with shape `k` and scale `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    k: f64,
    lambda: f64,
}

impl Limited for Weibull {
    const PARAMETER_LIMITS: Limits = &[("k", Interval::POSITIVE), ("λ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::NON_NEGATIVE)];
}

impl Weibull {
    /// Create a Weibull distribution; `k, λ ∈ (0,∞)`.
    pub fn new(k: f64, lambda: f64) -> Result<Self> {
        Self::check_parameters(&[("k", k), ("λ", lambda)])?;
        Ok(Self { k, lambda })
    }

    /// Shape.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Scale.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Moments for Weibull {
    fn mean(&self) -> f64 {
        self.lambda * gamma(1.0 + 1.0 / self.k)
    }

    fn variance(&self) -> f64 {
        let g1 = gamma(1.0 + 1.0 / self.k);
        let g2 = gamma(1.0 + 2.0 / self.k);
        self.lambda * self.lambda * (g2 - g1 * g1)
    }
}

impl ContinuousDistribution for Weibull {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(-(-(x / self.lambda).powf(self.k)).exp_m1())
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let (k, lambda) = (self.k, self.lambda);
        if x == 0.0 {
            if k < 1.0 {
                return Ok(f64::INFINITY);
            }
            if k > 1.0 {
                return Ok(f64::NEG_INFINITY);
            }
            // k == 1 => exponential with rate 1/lambda
            return Ok(-lambda.ln());
        }
        let x_over_l = x / lambda;
        Ok(k.ln() - lambda.ln() + (k - 1.0) * x_over_l.ln() - x_over_l.powf(k))
    }
}

impl Quantile for Weibull {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(self.lambda * (-(-p).ln_1p()).powf(1.0 / self.k))
    }
}
