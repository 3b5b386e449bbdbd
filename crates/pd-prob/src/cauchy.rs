//! Cauchy distribution.

use std::f64::consts::PI;

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

/// Cauchy distribution with location `x₀` and scale `γ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    x0: f64,
    gamma: f64,
}

impl Limited for Cauchy {
    const PARAMETER_LIMITS: Limits = &[("x₀", Interval::REAL), ("γ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl Cauchy {
    /// Create a Cauchy distribution; `γ ∈ (0,∞)`.
    pub fn new(x0: f64, gamma: f64) -> Result<Self> {
        Self::check_parameters(&[("x₀", x0), ("γ", gamma)])?;
        Ok(Self { x0, gamma })
    }

    /// Location.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Scale.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Median; equal to `x₀`.
    pub fn median(&self) -> f64 {
        self.x0
    }
}

/// Neither moment exists.
impl Moments for Cauchy {
    fn mean(&self) -> f64 {
        f64::NAN
    }

    fn variance(&self) -> f64 {
        f64::NAN
    }
}

impl ContinuousDistribution for Cauchy {
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let z = (x - self.x0) / self.gamma;
        Ok(1.0 / (PI * self.gamma * (1.0 + z * z)))
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(0.5 + ((x - self.x0) / self.gamma).atan() / PI)
    }
}

impl Quantile for Cauchy {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.x0 + self.gamma * (PI * (p - 0.5)).tan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_values() {
        let d = Cauchy::new(1.0, 2.0).unwrap();
        assert_abs_diff_eq!(d.pdf(1.0).unwrap(), 1.0 / (2.0 * PI), epsilon = 1e-15);
        assert_eq!(d.cdf(1.0).unwrap(), 0.5);
        assert_abs_diff_eq!(d.cdf(3.0).unwrap(), 0.75, epsilon = 1e-15);
        assert_abs_diff_eq!(d.inverse(0.75).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moments_undefined() {
        let d = Cauchy::new(0.0, 1.0).unwrap();
        assert!(d.mean().is_nan());
        assert!(d.variance().is_nan());
        assert_eq!(d.median(), 0.0);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Cauchy::new(0.0, 0.0).is_err());
        assert!(Cauchy::new(0.0, 1.0).unwrap().inverse(-0.5).is_err());
    }
}
