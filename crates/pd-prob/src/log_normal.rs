//! Log-normal distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

use crate::math::{standard_normal_cdf, standard_normal_inverse, standard_normal_ln_pdf};

/// `ln X ~ Normal(μ, σ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl Limited for LogNormal {
    const PARAMETER_LIMITS: Limits = &[("μ", Interval::REAL), ("σ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::NON_NEGATIVE)];
}

impl LogNormal {
    /// Create a Log-normal distribution; `σ ∈ (0,∞)`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        Self::check_parameters(&[("μ", mu), ("σ", sigma)])?;
        Ok(Self { mu, sigma })
    }

    /// Mean of `ln X`.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of `ln X`.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Moments for LogNormal {
    fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    fn variance(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        s2.exp_m1() * (2.0 * self.mu + s2).exp()
    }
}

impl ContinuousDistribution for LogNormal {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x == 0.0 {
            return Ok(0.0);
        }
        Ok(standard_normal_cdf((x.ln() - self.mu) / self.sigma))
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x == 0.0 || x.is_infinite() {
            return Ok(f64::NEG_INFINITY);
        }
        let lx = x.ln();
        Ok(standard_normal_ln_pdf((lx - self.mu) / self.sigma) - self.sigma.ln() - lx)
    }
}

impl Quantile for LogNormal {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok((self.mu + self.sigma * standard_normal_inverse(p)).exp())
    }
}
