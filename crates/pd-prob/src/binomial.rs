//! Binomial distribution.

use pd_core::{DiscreteDistribution, Interval, Limited, Limits, Moments, Result};

use crate::combinatorics::{binomial, ln_binomial};

/// Number of successes in `n` independent trials with success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Limited for Binomial {
    const PARAMETER_LIMITS: Limits = &[("n", Interval::NON_NEGATIVE), ("p", Interval::UNIT)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::NON_NEGATIVE)];
}

impl Binomial {
    /// Create a Binomial distribution; `p ∈ [0,1]`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        Self::check_parameters(&[("n", n as f64), ("p", p)])?;
        Ok(Self { n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    fn mass(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        let (n, p) = (self.n, self.p);
        let (coefficient, hits, misses) =
            (binomial(n, k), p.powf(k as f64), (1.0 - p).powf((n - k) as f64));
        let direct = coefficient * hits * misses;
        if direct.is_normal() && coefficient.is_normal() && hits.is_normal() && misses.is_normal() {
            return direct;
        }
        // A factor left the normal range; same quantity in log space.
        self.ln_mass(k).exp()
    }

    fn ln_mass(&self, k: u64) -> f64 {
        if k > self.n {
            return f64::NEG_INFINITY;
        }
        let (n, p) = (self.n, self.p);
        // Degenerate p: 0·ln 0 terms vanish.
        if p == 0.0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if p == 1.0 {
            return if k == n { 0.0 } else { f64::NEG_INFINITY };
        }
        let kf = k as f64;
        ln_binomial(n, k) + kf * p.ln() + (n as f64 - kf) * (1.0 - p).ln()
    }
}

impl Moments for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }
}

impl DiscreteDistribution for Binomial {
    /// `C(n,k) pᵏ (1−p)ⁿ⁻ᵏ`; zero for `k > n`.
    fn pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(self.mass(k as u64))
    }

    /// `Σ_{x=0}^{min(k,n)} pmf(x)`.
    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        if k as u64 >= self.n {
            return Ok(1.0);
        }
        Ok((0..=k as u64).map(|x| self.mass(x)).sum())
    }

    fn ln_pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(self.ln_mass(k as u64))
    }
}
