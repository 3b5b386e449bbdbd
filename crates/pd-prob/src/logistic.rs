//! Logistic distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

use crate::math::{log_sigmoid, sigmoid};

/// Logistic distribution with location `μ` and scale `s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    mu: f64,
    s: f64,
}

impl Limited for Logistic {
    const PARAMETER_LIMITS: Limits = &[("μ", Interval::REAL), ("s", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl Logistic {
    /// Create a Logistic distribution; `s ∈ (0,∞)`.
    pub fn new(mu: f64, s: f64) -> Result<Self> {
        Self::check_parameters(&[("μ", mu), ("s", s)])?;
        Ok(Self { mu, s })
    }

    /// Location.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale.
    pub fn s(&self) -> f64 {
        self.s
    }
}

impl Moments for Logistic {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        let pi_s = std::f64::consts::PI * self.s;
        pi_s * pi_s / 3.0
    }
}

impl ContinuousDistribution for Logistic {
    /// `σ(z) σ(−z) / s` with `z = (x − μ)/s`.
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let z = (x - self.mu) / self.s;
        Ok(sigmoid(z) * sigmoid(-z) / self.s)
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(sigmoid((x - self.mu) / self.s))
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let z = (x - self.mu) / self.s;
        Ok(log_sigmoid(z) + log_sigmoid(-z) - self.s.ln())
    }
}

impl Quantile for Logistic {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(self.mu + self.s * (p / (1.0 - p)).ln())
    }
}
