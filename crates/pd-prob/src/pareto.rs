//! Pareto (type I) distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

/// Pareto distribution with scale `x_m` (minimum) and shape `α`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    scale: f64,
    alpha: f64,
}

impl Limited for Pareto {
    const PARAMETER_LIMITS: Limits = &[("x_m", Interval::POSITIVE), ("α", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::POSITIVE)];
}

impl Pareto {
    /// Create a Pareto distribution; `x_m, α ∈ (0,∞)`.
    pub fn new(scale: f64, alpha: f64) -> Result<Self> {
        Self::check_parameters(&[("x_m", scale), ("α", alpha)])?;
        Ok(Self { scale, alpha })
    }

    /// Minimum value `x_m`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Tail index.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Moments for Pareto {
    /// Infinite for `α <= 1`.
    fn mean(&self) -> f64 {
        if self.alpha <= 1.0 {
            return f64::INFINITY;
        }
        self.alpha * self.scale / (self.alpha - 1.0)
    }

    /// Infinite for `α <= 2`.
    fn variance(&self) -> f64 {
        let a = self.alpha;
        if a <= 2.0 {
            return f64::INFINITY;
        }
        self.scale * self.scale * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
    }
}

impl ContinuousDistribution for Pareto {
    /// `(α/x)(x_m/x)ᵅ`; `x_mᵅ` alone overflows for large `α`.
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x < self.scale {
            return Ok(0.0);
        }
        Ok((self.alpha / x) * (self.scale / x).powf(self.alpha))
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x < self.scale {
            return Ok(0.0);
        }
        Ok(1.0 - (self.scale / x).powf(self.alpha))
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x < self.scale {
            return Ok(f64::NEG_INFINITY);
        }
        Ok(self.alpha.ln() - x.ln() + self.alpha * (self.scale / x).ln())
    }
}

impl Quantile for Pareto {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(self.scale * (1.0 - p).powf(-1.0 / self.alpha))
    }
}
