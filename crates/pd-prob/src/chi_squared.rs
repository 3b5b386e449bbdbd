//! Chi-squared distribution.

use pd_core::{ContinuousDistribution, Interval, Limited, Limits, Moments, Result};

use crate::gamma::Gamma;

/// Chi-squared distribution with `k` degrees of freedom; `Gamma(k/2, 2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared {
    k: f64,
    gamma: Gamma,
}

impl Limited for ChiSquared {
    const PARAMETER_LIMITS: Limits = &[("k", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::NON_NEGATIVE)];
}

impl ChiSquared {
    /// Create a Chi-squared distribution; `k ∈ (0,∞)`.
    pub fn new(k: f64) -> Result<Self> {
        Self::check_parameters(&[("k", k)])?;
        Ok(Self { k, gamma: Gamma::new(k / 2.0, 2.0)? })
    }

    /// Degrees of freedom.
    pub fn k(&self) -> f64 {
        self.k
    }
}

impl Moments for ChiSquared {
    fn mean(&self) -> f64 {
        self.k
    }

    fn variance(&self) -> f64 {
        2.0 * self.k
    }
}

impl ContinuousDistribution for ChiSquared {
    fn pdf(&self, x: f64) -> Result<f64> {
        self.gamma.pdf(x)
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        self.gamma.cdf(x)
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        self.gamma.ln_pdf(x)
    }
}
