//! Beta distribution.

use pd_core::{ContinuousDistribution, Interval, Limited, Limits, Moments, Result};
use statrs::function::beta::{beta_reg, ln_beta};

/// Beta distribution with shapes `α` and `β` on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Limited for Beta {
    const PARAMETER_LIMITS: Limits = &[("α", Interval::POSITIVE), ("β", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::UNIT)];
}

impl Beta {
    /// Create a Beta distribution; `α, β ∈ (0,∞)`.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Self::check_parameters(&[("α", alpha), ("β", beta)])?;
        Ok(Self { alpha, beta })
    }

    /// First shape.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Moments for Beta {
    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> f64 {
        let (a, b) = (self.alpha, self.beta);
        let s = a + b;
        a * b / (s * s * (s + 1.0))
    }
}

impl ContinuousDistribution for Beta {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    /// Regularized incomplete beta `I_x(α, β)`.
    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        if x == 0.0 || x == 1.0 {
            return Ok(x);
        }
        Ok(beta_reg(self.alpha, self.beta, x))
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let (a, b) = (self.alpha, self.beta);
        let ln_norm = -ln_beta(a, b);
        if x == 0.0 {
            if a < 1.0 {
                return Ok(f64::INFINITY);
            }
            if a > 1.0 {
                return Ok(f64::NEG_INFINITY);
            }
            // a == 1: x term is 0.
            return Ok(ln_norm + (b - 1.0) * (1.0 - x).ln());
        }
        if x == 1.0 {
            if b < 1.0 {
                return Ok(f64::INFINITY);
            }
            if b > 1.0 {
                return Ok(f64::NEG_INFINITY);
            }
            return Ok(ln_norm + (a - 1.0) * x.ln());
        }
        Ok(ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln())
    }
}
