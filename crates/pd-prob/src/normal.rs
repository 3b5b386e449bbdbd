//! Normal distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

use crate::math::{standard_normal_cdf, standard_normal_inverse, standard_normal_ln_pdf};

/// Normal distribution `N(μ, σ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Limited for Normal {
    const PARAMETER_LIMITS: Limits = &[("μ", Interval::REAL), ("σ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl Normal {
    /// Create a Normal distribution; `σ ∈ (0,∞)`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        Self::check_parameters(&[("μ", mu), ("σ", sigma)])?;
        Ok(Self { mu, sigma })
    }

    /// `N(0, 1)`.
    pub fn standard() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }

    /// Mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Moments for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std_dev(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(standard_normal_cdf((x - self.mu) / self.sigma))
    }

    /// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(standard_normal_ln_pdf((x - self.mu) / self.sigma) - self.sigma.ln())
    }
}

impl Quantile for Normal {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        Ok(self.mu + self.sigma * standard_normal_inverse(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::math::LN_SQRT_2PI;

    #[test]
    fn test_standard_at_zero() {
        let lp = Normal::standard().ln_pdf(0.0).unwrap();
        assert!((lp + LN_SQRT_2PI).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let d = Normal::new(0.0, 2.0).unwrap();
        assert!((d.pdf(1.3).unwrap() - d.pdf(-1.3).unwrap()).abs() < 1e-15);
        assert_abs_diff_eq!(d.cdf(1.3).unwrap() + d.cdf(-1.3).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_reference_values() {
        let d = Normal::new(1.0, 2.0).unwrap();
        assert_abs_diff_eq!(d.pdf(1.0).unwrap(), 0.199_471_140_200_716_35, epsilon = 1e-12);
        assert_abs_diff_eq!(d.cdf(3.0).unwrap(), 0.841_344_746_068_542_9, epsilon = 1e-12);
        assert_abs_diff_eq!(d.inverse(0.841_344_746_068_542_9).unwrap(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_sigma() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }
}
