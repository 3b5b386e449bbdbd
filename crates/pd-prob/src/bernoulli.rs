//! Bernoulli distribution.

use pd_core::{DiscreteDistribution, Interval, Limited, Limits, Moments, Result};

use crate::math::log_sigmoid;

/// Single trial with success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Limited for Bernoulli {
    const PARAMETER_LIMITS: Limits = &[("p", Interval::UNIT)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::UNIT)];
}

impl Bernoulli {
    /// Create a Bernoulli distribution; `p ∈ [0,1]`.
    pub fn new(p: f64) -> Result<Self> {
        Self::check_parameters(&[("p", p)])?;
        Ok(Self { p })
    }

    /// Create a Bernoulli distribution from `logit(p) = ln(p / (1 − p))`.
    pub fn from_logit(eta: f64) -> Result<Self> {
        Self::new(crate::math::sigmoid(eta))
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Log-PMF at `k ∈ {0, 1}` with the success probability given in logit space.
///
/// Stays finite where `ln p` would lose precision for `p` near 0 or 1.
pub fn ln_pmf_logit(k: u8, eta: f64) -> Result<f64> {
    Bernoulli::check_support("k", k as f64)?;
    Ok(if k == 1 { log_sigmoid(eta) } else { log_sigmoid(-eta) })
}

impl Moments for Bernoulli {
    fn mean(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(if k == 1 { self.p } else { 1.0 - self.p })
    }

    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(if k == 1 { 1.0 } else { 1.0 - self.p })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::Error;

    #[test]
    fn test_basic_values() {
        let d = Bernoulli::new(0.3).unwrap();
        assert_eq!(d.pmf(1).unwrap(), 0.3);
        assert_eq!(d.pmf(0).unwrap(), 0.7);
        assert_eq!(d.cdf(0).unwrap(), 0.7);
        assert_eq!(d.cdf(1).unwrap(), 1.0);
        assert!((d.variance() - 0.21).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_inputs() {
        let d = Bernoulli::new(0.5).unwrap();
        assert!(matches!(d.pmf(2), Err(Error::SupportDomain { name: "k", .. })));
        assert!(d.pmf(-1).is_err());
        assert!(Bernoulli::new(-0.1).is_err());
        assert!(Bernoulli::new(1.1).is_err());
    }

    #[test]
    fn test_degenerate_probs() {
        let d = Bernoulli::new(0.0).unwrap();
        assert_eq!(d.ln_pmf(0).unwrap(), 0.0);
        let lp = d.ln_pmf(1).unwrap();
        assert!(lp.is_infinite() && lp.is_sign_negative());
    }

    #[test]
    fn test_logit_matches_prob() {
        let eta: f64 = -0.7;
        let d = Bernoulli::from_logit(eta).unwrap();
        for k in 0..=1u8 {
            let a = d.ln_pmf(k as i64).unwrap();
            let b = ln_pmf_logit(k, eta).unwrap();
            assert!((a - b).abs() < 1e-12);
        }
        assert!(ln_pmf_logit(2, 0.0).is_err());
    }
}
