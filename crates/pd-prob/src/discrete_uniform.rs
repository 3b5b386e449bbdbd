//! Discrete uniform distribution over the integers `a..=b`.

use pd_core::{DiscreteDistribution, Error, Interval, Limited, Limits, Moments, Result};

/// Every integer in `[a, b]` equally likely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteUniform {
    a: i64,
    b: i64,
}

impl Limited for DiscreteUniform {
    const PARAMETER_LIMITS: Limits = &[("a", Interval::REAL), ("b", Interval::REAL)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::REAL)];
}

impl DiscreteUniform {
    /// Create a discrete uniform distribution; requires `a <= b`.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        Self::check_parameters(&[("a", a as f64), ("b", b as f64)])?;
        if a > b {
            return Err(Error::InvalidParameters(format!("a must be <= b, got a={} b={}", a, b)));
        }
        Ok(Self { a, b })
    }

    /// Lower end.
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Upper end.
    pub fn b(&self) -> i64 {
        self.b
    }

    fn count(&self) -> f64 {
        (self.b as f64 - self.a as f64) + 1.0
    }
}

impl Moments for DiscreteUniform {
    fn mean(&self) -> f64 {
        (self.a as f64 + self.b as f64) / 2.0
    }

    fn variance(&self) -> f64 {
        let n = self.count();
        (n * n - 1.0) / 12.0
    }
}

impl DiscreteDistribution for DiscreteUniform {
    fn pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        if k < self.a || k > self.b {
            return Ok(0.0);
        }
        Ok(1.0 / self.count())
    }

    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        if k < self.a {
            return Ok(0.0);
        }
        if k >= self.b {
            return Ok(1.0);
        }
        Ok((k as f64 - self.a as f64 + 1.0) / self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die() {
        let d = DiscreteUniform::new(1, 6).unwrap();
        assert_eq!(d.pmf(3).unwrap(), 1.0 / 6.0);
        assert_eq!(d.pmf(0).unwrap(), 0.0);
        assert_eq!(d.pmf(7).unwrap(), 0.0);
        assert_eq!(d.cdf(0).unwrap(), 0.0);
        assert_eq!(d.cdf(3).unwrap(), 0.5);
        assert_eq!(d.cdf(6).unwrap(), 1.0);
        assert_eq!(d.mean(), 3.5);
        assert!((d.variance() - 35.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_negative_range() {
        let d = DiscreteUniform::new(-2, 2).unwrap();
        assert_eq!(d.pmf(-2).unwrap(), 0.2);
        assert_eq!(d.mean(), 0.0);
    }

    #[test]
    fn test_single_point() {
        let d = DiscreteUniform::new(4, 4).unwrap();
        assert_eq!(d.pmf(4).unwrap(), 1.0);
        assert_eq!(d.variance(), 0.0);
    }

    #[test]
    fn test_reversed_bounds() {
        assert!(matches!(DiscreteUniform::new(3, 1), Err(Error::InvalidParameters(_))));
    }
}
