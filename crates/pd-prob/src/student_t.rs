//! Student-t distribution (location-scale form).

use pd_core::{ContinuousDistribution, Interval, Limited, Limits, Moments, Result};
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;

/// Natural log of π.
const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Student-t with location `μ`, scale `σ` and `ν` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    mu: f64,
    sigma: f64,
    nu: f64,
}

impl Limited for StudentT {
    const PARAMETER_LIMITS: Limits =
        &[("μ", Interval::REAL), ("σ", Interval::POSITIVE), ("ν", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl StudentT {
    /// Create a Student-t distribution; `σ, ν ∈ (0,∞)`.
    pub fn new(mu: f64, sigma: f64, nu: f64) -> Result<Self> {
        Self::check_parameters(&[("μ", mu), ("σ", sigma), ("ν", nu)])?;
        Ok(Self { mu, sigma, nu })
    }

    /// Standard Student-t with `ν` degrees of freedom.
    pub fn standard(nu: f64) -> Result<Self> {
        Self::new(0.0, 1.0, nu)
    }

    /// Location.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Degrees of freedom.
    pub fn nu(&self) -> f64 {
        self.nu
    }
}

impl Moments for StudentT {
    /// `μ` for `ν > 1`, undefined otherwise.
    fn mean(&self) -> f64 {
        if self.nu > 1.0 { self.mu } else { f64::NAN }
    }

    fn variance(&self) -> f64 {
        let nu = self.nu;
        if nu > 2.0 {
            self.sigma * self.sigma * nu / (nu - 2.0)
        } else if nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for StudentT {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let t = (x - self.mu) / self.sigma;
        if t.is_infinite() {
            return Ok(if t > 0.0 { 1.0 } else { 0.0 });
        }
        let nu = self.nu;
        let tail = 0.5 * beta_reg(0.5 * nu, 0.5, nu / (nu + t * t));
        Ok(if t > 0.0 { 1.0 - tail } else { tail })
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let (sigma, nu) = (self.sigma, self.nu);
        let z = (x - self.mu) / sigma;
        let a = ln_gamma(0.5 * (nu + 1.0)) - ln_gamma(0.5 * nu);
        let b = -0.5 * (nu.ln() + LN_PI);
        let c = -sigma.ln();
        let d = -0.5 * (nu + 1.0) * (z * z / nu).ln_1p();
        Ok(a + b + c + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cauchy_at_zero() {
        // nu=1 => Cauchy(0,1): pdf(0) = 1/pi
        let d = StudentT::standard(1.0).unwrap();
        assert!((d.ln_pdf(0.0).unwrap() + std::f64::consts::PI.ln()).abs() < 1e-12);
        let c = crate::cauchy::Cauchy::new(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(d.cdf(2.5).unwrap(), c.cdf(2.5).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let d = StudentT::new(0.0, 2.0, 5.0).unwrap();
        assert!((d.ln_pdf(1.3).unwrap() - d.ln_pdf(-1.3).unwrap()).abs() < 1e-12);
        assert_eq!(d.cdf(0.0).unwrap(), 0.5);
        assert_abs_diff_eq!(d.cdf(1.3).unwrap() + d.cdf(-1.3).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_quantile() {
        // t_{0.975, 10} = 2.228138851986274
        let d = StudentT::standard(10.0).unwrap();
        assert_abs_diff_eq!(d.cdf(2.228_138_851_986_274).unwrap(), 0.975, epsilon = 1e-9);
    }

    #[test]
    fn test_moments() {
        assert!(StudentT::standard(1.0).unwrap().mean().is_nan());
        assert_eq!(StudentT::new(3.0, 1.0, 1.5).unwrap().mean(), 3.0);
        assert_eq!(StudentT::standard(1.5).unwrap().variance(), f64::INFINITY);
        assert_eq!(StudentT::new(0.0, 2.0, 4.0).unwrap().variance(), 8.0);
    }

    #[test]
    fn test_invalid_params() {
        assert!(StudentT::new(0.0, 0.0, 5.0).is_err());
        assert!(StudentT::new(0.0, 1.0, 0.0).is_err());
    }
}
