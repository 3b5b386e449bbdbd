//! Geometric distribution (failures before the first success).

use pd_core::{DiscreteDistribution, Interval, Limited, Limits, Moments, Result};

/// Number of failures before the first success, success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Limited for Geometric {
    const PARAMETER_LIMITS: Limits = &[("p", Interval::LEFT_OPEN_UNIT)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::NON_NEGATIVE)];
}

impl Geometric {
    /// Create a Geometric distribution; `p ∈ (0,1]`.
    pub fn new(p: f64) -> Result<Self> {
        Self::check_parameters(&[("p", p)])?;
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for Geometric {
    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for Geometric {
    /// `(1 − p)ᵏ p`
    fn pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok((1.0 - self.p).powf(k as f64) * self.p)
    }

    /// `1 − (1 − p)ᵏ⁺¹`
    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(1.0 - (1.0 - self.p).powf(k as f64 + 1.0))
    }
}
