//! Continuous uniform distribution.

use pd_core::{
    ContinuousDistribution, Error, Interval, Limited, Limits, Moments, Quantile, Result,
    check_probability,
};

/// Uniform density on `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Limited for Uniform {
    const PARAMETER_LIMITS: Limits = &[("a", Interval::REAL), ("b", Interval::REAL)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl Uniform {
    /// Create a Uniform distribution; requires `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        Self::check_parameters(&[("a", a), ("b", b)])?;
        if a >= b {
            return Err(Error::InvalidParameters(format!("a must be < b, got a={} b={}", a, b)));
        }
        Ok(Self { a, b })
    }

    /// Lower end.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper end.
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Moments for Uniform {
    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        let w = self.b - self.a;
        w * w / 12.0
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x < self.a || x > self.b {
            return Ok(0.0);
        }
        Ok(1.0 / (self.b - self.a))
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x < self.a {
            return Ok(0.0);
        }
        if x >= self.b {
            return Ok(1.0);
        }
        Ok((x - self.a) / (self.b - self.a))
    }
}

impl Quantile for Uniform {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(self.a + p * (self.b - self.a))
    }
}
