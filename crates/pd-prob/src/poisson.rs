//! Poisson distribution.
//!
//! Number of events in a fixed interval when events occur independently at
//! a constant average rate `λ`.

use pd_core::{DiscreteDistribution, Interval, Limited, Limits, Moments, Result};

use crate::combinatorics::{factorial, ln_factorial};

/// Poisson distribution with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Limited for Poisson {
    const PARAMETER_LIMITS: Limits = &[("λ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("k", Interval::NON_NEGATIVE)];
}

impl Poisson {
    /// Create a Poisson distribution; `λ ∈ (0,∞)`.
    pub fn new(lambda: f64) -> Result<Self> {
        Self::check_parameters(&[("λ", lambda)])?;
        Ok(Self { lambda })
    }

    /// Average number of events per interval.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// `λᵏ e^(−λ) / k!` for an already validated `k`.
    fn mass(&self, k: u64) -> f64 {
        let lambda = self.lambda;
        let damping = (-lambda).exp();
        let direct = lambda.powf(k as f64) * damping / factorial(k);
        if direct.is_normal() && damping.is_normal() {
            return direct;
        }
        // Some factor overflowed or underflowed; same quantity in log space.
        (k as f64 * lambda.ln() - lambda - ln_factorial(k)).exp()
    }
}

impl Moments for Poisson {
    fn mean(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }
}

impl DiscreteDistribution for Poisson {
    /// ```text
    ///            λᵏ e^(−λ)
    /// P(X = k) = ---------
    ///               k!
    /// ```
    fn pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        Ok(self.mass(k as u64))
    }

    /// `Σ_{x=0}^{k} pmf(x)`, summed in ascending order.
    fn cdf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        let mut total = 0.0;
        for x in 0..=k as u64 {
            let term = self.mass(x);
            // Past the mode the terms only shrink; once one underflows the rest add nothing.
            if term == 0.0 && x as f64 > self.lambda {
                break;
            }
            total += term;
        }
        Ok(total)
    }

    fn ln_pmf(&self, k: i64) -> Result<f64> {
        Self::check_support("k", k as f64)?;
        let k = k as u64;
        Ok(k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k))
    }
}
