//! Exponential distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

/// Exponential distribution with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Limited for Exponential {
    const PARAMETER_LIMITS: Limits = &[("λ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::NON_NEGATIVE)];
}

impl Exponential {
    /// Create an Exponential distribution; `λ ∈ (0,∞)`.
    pub fn new(rate: f64) -> Result<Self> {
        Self::check_parameters(&[("λ", rate)])?;
        Ok(Self { rate })
    }

    /// Rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Moments for Exponential {
    fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(self.rate * (-self.rate * x).exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(-(-self.rate * x).exp_m1())
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(self.rate.ln() - self.rate * x)
    }
}

impl Quantile for Exponential {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(-(-p).ln_1p() / self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_basic_value() {
        let d = Exponential::new(2.0).unwrap();
        assert!((d.ln_pdf(0.5).unwrap() - (2.0f64.ln() - 1.0)).abs() < 1e-12);
        assert_abs_diff_eq!(d.cdf(0.5).unwrap(), 1.0 - (-1.0f64).exp(), epsilon = 1e-15);
        assert_eq!(d.mean(), 0.5);
    }

    #[test]
    fn test_out_of_support() {
        let d = Exponential::new(2.0).unwrap();
        assert!(d.pdf(-0.1).is_err());
        assert!(d.cdf(-0.1).is_err());
    }

    #[test]
    fn test_inverse() {
        let d = Exponential::new(0.7).unwrap();
        for p in [0.0, 0.1, 0.5, 0.99] {
            assert_abs_diff_eq!(d.cdf(d.inverse(p).unwrap()).unwrap(), p, epsilon = 1e-12);
        }
        assert_eq!(d.inverse(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_invalid_rate() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
    }
}
