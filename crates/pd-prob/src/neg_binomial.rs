//! Negative binomial distribution.

use pd_core::{DiscreteDistribution, Error, Interval, Limited, Limits, Moments, Result};
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;

use crate::combinatorics::ln_factorial;

/// Number of failures `k` before the `r`-th success, success probability `p`.
///
/// `P(K=k) = Γ(k+r) / (Γ(r) k!) · pʳ (1−p)ᵏ`; `r` need not be an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    r: f64,
    p: f64,
}

impl Limited for NegativeBinomial {
    const PARAMETER_LIMITS: Limits = &[("r", Interval::POSITIVE), ("p", Interval::OPEN_UNIT)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::NON_NEGATIVE)];
}

impl NegativeBinomial {
    /// Create a Negative Binomial distribution; `r ∈ (0,∞)`, `p ∈ (0,1)`.
    pub fn new(r: f64, p: f64) -> Result<Self> {
        Self::check_parameters(&[("r", r), ("p", p)])?;
        Ok(Self { r, p })
    }

    /// GLM (NB2) parameterization: mean `mu` and dispersion `alpha`, with
    /// `Var(Y) = mu + alpha·mu²`.
    pub fn from_mean_dispersion(mu: f64, alpha: f64) -> Result<Self> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(Error::InvalidParameters(format!("mu must be finite and > 0, got {}", mu)));
        }
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "alpha must be finite and > 0, got {}",
                alpha
            )));
        }
        let r = 1.0 / alpha;
        Self::new(r, r / (r + mu))
    }

    /// Number of successes.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for NegativeBinomial {
    fn mean(&self) -> f64 {
        self.r * (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        self.r * (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for NegativeBinomial {
    fn pmf(&self, k: i64) -> Result<f64> {
        Ok(self.ln_pmf(k)?.exp())
    }

    /// `I_p(r, k+1)`, the regularized incomplete beta function.
    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(beta_reg(self.r, k as f64 + 1.0, self.p))
    }

    fn ln_pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        let kf = k as f64;
        let ln_coeff = ln_gamma(kf + self.r) - ln_gamma(self.r) - ln_factorial(k as u64);
        Ok(ln_coeff + self.r * self.p.ln() + kf * (1.0 - self.p).ln())
    }
}
