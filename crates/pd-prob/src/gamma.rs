//! Gamma distribution.

use pd_core::{
    ContinuousDistribution, Domain, Interval, Limited, Limits, Moments, Result, check_limits,
};
use statrs::function::gamma::{gamma_lr, ln_gamma};

/// Gamma distribution with `shape` (k) and `scale` (θ).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Limited for Gamma {
    const PARAMETER_LIMITS: Limits = &[("k", Interval::POSITIVE), ("θ", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::NON_NEGATIVE)];
}

const RATE_LIMITS: Limits = &[("rate", Interval::POSITIVE)];

impl Gamma {
    /// Create a Gamma distribution; `k ∈ (0,∞)`, `θ ∈ (0,∞)`.
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        Self::check_parameters(&[("k", shape), ("θ", scale)])?;
        Ok(Self { shape, scale })
    }

    /// Shape/rate parameterization; `rate = 1/θ`, `rate ∈ (0,∞)`.
    pub fn with_rate(shape: f64, rate: f64) -> Result<Self> {
        check_limits(Domain::Parameter, RATE_LIMITS, &[("rate", rate)])?;
        Self::new(shape, 1.0 / rate)
    }

    /// Shape.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Moments for Gamma {
    fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }
}

impl ContinuousDistribution for Gamma {
    fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.ln_pdf(x)?.exp())
    }

    /// Regularized lower incomplete gamma `P(k, x/θ)`.
    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        // gamma_lr is only defined on (0,∞); x/θ may also overflow for tiny θ.
        let z = x / self.scale;
        if z <= 0.0 {
            return Ok(0.0);
        }
        if z == f64::INFINITY {
            return Ok(1.0);
        }
        Ok(gamma_lr(self.shape, z))
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let (shape, rate) = (self.shape, 1.0 / self.scale);
        if x == 0.0 {
            if shape < 1.0 {
                return Ok(f64::INFINITY);
            }
            if shape > 1.0 {
                return Ok(f64::NEG_INFINITY);
            }
            // shape == 1 => exponential
            return Ok(rate.ln());
        }
        let ln_norm = shape * rate.ln() - ln_gamma(shape);
        Ok(ln_norm + (shape - 1.0) * x.ln() - rate * x)
    }
}
